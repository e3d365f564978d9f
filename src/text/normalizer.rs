/*!
 * Word normalization.
 *
 * Reduces a raw subtitle token to the comparable form used by the
 * known-word matcher and by vocabulary loading: lowercase ASCII letters
 * and interior apostrophes only.
 */

/// The single apostrophe every quote variant is folded into
pub const APOSTROPHE: char = '\'';

/// Map apostrophe-like quote characters to the canonical apostrophe
fn canonical_quote(c: char) -> char {
    match c {
        // left/right single quotation marks, reversed-9 quote
        '\u{2018}' | '\u{2019}' | '\u{201B}' => APOSTROPHE,
        // modifier letter apostrophe, fullwidth apostrophe
        '\u{02BC}' | '\u{FF07}' => APOSTROPHE,
        other => other,
    }
}

/// Canonicalize a raw token into its comparable lowercase form.
///
/// `"Don’t,"` becomes `"don't"`, `"'cause"` becomes `"cause"` and a
/// punctuation-only token becomes the empty string.
pub fn normalize(token: &str) -> String {
    let cleaned: String = token
        .chars()
        .flat_map(char::to_lowercase)
        .map(canonical_quote)
        .filter(|c| c.is_ascii_lowercase() || *c == APOSTROPHE)
        .collect();

    cleaned.trim_matches(APOSTROPHE).to_string()
}
