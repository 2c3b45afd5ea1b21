//! Display string to path-safe slug conversion.
//!
//! Two variants exist. [`normalize_text`] keeps stray punctuation and is used
//! for icon file names built from attribute values. [`slugify`] additionally
//! hard-removes anything outside `[a-z0-9-]` and is used for entity ids.

use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalize display text into a lowercase, hyphenated path segment.
///
/// Missing input is treated as the empty string. Accents are removed through
/// canonical decomposition, dots are dropped and whitespace runs collapse to
/// a single `-`.
#[must_use]
pub fn normalize_text(text: Option<&str>) -> String {
    let stripped: String = text
        .unwrap_or_default()
        .trim()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c) && *c != '.')
        .collect();
    hyphenate(&stripped.to_lowercase())
}

/// Strict variant of [`normalize_text`] for entity slugs.
///
/// `ñ`/`Ñ` map to `n`/`N` explicitly and every character outside
/// `[a-z0-9-]` is removed.
#[must_use]
pub fn slugify(text: Option<&str>) -> String {
    let mapped: String = text
        .unwrap_or_default()
        .chars()
        .map(|c| match c {
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect();
    normalize_text(Some(&mapped))
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn hyphenate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
