//! Field schema of the invoice QR code payload.

use crate::core::QrParseError;

/// Mandatory field codes, in the order they are reported when missing.
pub static REQUIRED_FIELDS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "N", "O", "Q", "R"];

/// Letters opening a tax country region block, in extraction order.
pub(crate) const REGION_LETTERS: [char; 3] = ['I', 'J', 'K'];

/// Maximum value length per top-level field code.
static FIELD_MAX_LENGTHS: &[(&str, usize)] = &[
    ("A", 9),
    ("B", 30),
    ("C", 12),
    ("D", 2),
    ("E", 1),
    ("F", 8),
    ("G", 60),
    ("H", 70),
    ("L", 16),
    ("M", 16),
    ("N", 16),
    ("O", 16),
    ("P", 16),
    ("Q", 4),
    ("R", 4),
    ("S", 65),
];

/// Maximum value length per region sub-field, indexed by sub-field index - 1.
static REGION_MAX_LENGTHS: [usize; 8] = [5, 16, 16, 16, 16, 16, 16, 16];

/// Maximum value length for a field or region sub-field code.
///
/// Returns `None` for codes outside the schema, including region codes with
/// an index outside 1-8.
pub fn max_length(code: &str) -> Option<usize> {
    if is_region_key(code) {
        return region_index(code).ok().map(region_max_length);
    }
    field_max_length(code)
}

pub(crate) fn field_max_length(code: &str) -> Option<usize> {
    FIELD_MAX_LENGTHS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, max)| max)
}

/// `index` must be within 1-8.
pub(crate) fn region_max_length(index: u8) -> usize {
    REGION_MAX_LENGTHS[usize::from(index) - 1]
}

pub(crate) fn is_region_key(key: &str) -> bool {
    key.starts_with(|c: char| REGION_LETTERS.contains(&c))
}

/// Sub-field index of a region key such as `I3`. The key must start with a
/// region letter.
pub(crate) fn region_index(key: &str) -> Result<u8, QrParseError> {
    let digits = &key[1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QrParseError::InvalidParamFormat(
            "Found a tax country region element without index".into(),
        ));
    }

    match digits.parse::<u8>() {
        Ok(index @ 1..=8) => Ok(index),
        _ => Err(QrParseError::InvalidParamFormat(
            "Tax country region elements must be between 1 and 8".into(),
        )),
    }
}

/// Key of a region sub-field, e.g. `('J', 4)` gives `"J4"`.
pub(crate) fn region_key(letter: char, index: u8) -> String {
    format!("{letter}{index}")
}
