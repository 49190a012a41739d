use unicode_normalization::UnicodeNormalization;

/// Reduce a display name to its comparison key: trimmed, lowercased,
/// accent-stripped and with everything but letters, digits and whitespace removed.
///
/// `"  José! "` and `"jose"` share the key `"jose"`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Lowercased, accent-stripped form used as the primary text collation key.
/// Punctuation is kept so that it still orders.
pub fn fold_for_collation(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
