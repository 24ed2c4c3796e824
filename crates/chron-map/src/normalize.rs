//! Label normalization shared by header detection and column resolution.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Characters that, like whitespace, separate words in a label.
const SEPARATORS: &[char] = &['-', '_', '(', ')', '/', '.', ','];

/// Spacing (non-combining) diacritics, dropped like combining marks.
const SPACING_DIACRITICS: &[char] = &[
    '^', '`', '\u{a8}', '\u{af}', '\u{b4}', '\u{b7}', '\u{b8}', '\u{2c6}', '\u{2c7}',
    '\u{2d8}', '\u{2d9}', '\u{2da}', '\u{2db}', '\u{2dc}', '\u{2dd}',
];

fn is_diacritic(ch: char) -> bool {
    is_combining_mark(ch) || SPACING_DIACRITICS.contains(&ch)
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || SEPARATORS.contains(&ch)
}

/// Canonicalizes a label into a comparable key.
///
/// Lower-cases, strips diacritics, collapses every run of whitespace or
/// `- _ ( ) / . ,` into one space and trims. Two labels name the same
/// concept when their keys are equal.
pub fn normalize_key(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_space = false;
    // Lower-casing first keeps the key stable: some upper-case letters
    // lower-case into a base letter plus a combining mark.
    for ch in label.to_lowercase().nfd() {
        if is_diacritic(ch) {
            continue;
        }
        if is_separator(ch) {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}
