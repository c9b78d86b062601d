use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::QrParseError;

/// Field code → raw value, iterated in first-seen key order.
///
/// Inserting an existing key replaces its value and keeps its position, so
/// a duplicated field resolves to its last occurrence.
#[derive(Debug, Default)]
pub(crate) struct FieldDictionary<'a> {
    entries: Vec<(&'a str, &'a str)>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> FieldDictionary<'a> {
    pub(crate) fn insert(&mut self, key: &'a str, value: &'a str) {
        match self.positions.get(key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a str> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Split `CODE:value*CODE:value...` into a field dictionary.
pub(crate) fn tokenize(qr_data: &str) -> Result<FieldDictionary<'_>, QrParseError> {
    if !qr_data.contains('*') {
        return Err(QrParseError::InvalidParamFormat(
            "Missing * separator in the qr data string".into(),
        ));
    }

    let mut fields = FieldDictionary::default();
    for section in qr_data.split('*') {
        let mut parts = section.split(':');
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(QrParseError::InvalidParamFormat(
                "Not all sections of the qr data has 1 separator (:)".into(),
            ));
        };
        trace!(key, value, "read QR code field");
        fields.insert(key, value);
    }

    debug!(fields = fields.len(), "tokenized QR code data");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sections_in_order() {
        let fields = tokenize("A:1*B:two*C:PT").unwrap();
        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two"), ("C", "PT")]);
    }

    #[test]
    fn duplicate_key_last_value_wins() {
        let fields = tokenize("A:first*B:x*A:second").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("A"), Some("second"));
        let keys: Vec<_> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn missing_star_separator() {
        let err = tokenize("Abcd").unwrap_err();
        assert_eq!(
            err,
            QrParseError::InvalidParamFormat("Missing * separator in the qr data string".into())
        );
        assert!(tokenize("A:1").is_err());
    }

    #[test]
    fn section_without_colon() {
        let err = tokenize("AB*C:D").unwrap_err();
        assert_eq!(
            err,
            QrParseError::InvalidParamFormat(
                "Not all sections of the qr data has 1 separator (:)".into()
            )
        );
    }

    #[test]
    fn section_with_two_colons() {
        let err = tokenize("A:B*C:D:E").unwrap_err();
        assert!(matches!(err, QrParseError::InvalidParamFormat(_)));
        assert!(err.message().starts_with("Not all sections"));
    }

    #[test]
    fn trailing_star_is_an_empty_section() {
        assert!(tokenize("A:1*B:2*").is_err());
    }

    #[test]
    fn empty_key_and_value_are_kept() {
        let fields = tokenize(":*A:").unwrap();
        assert_eq!(fields.get(""), Some(""));
        assert_eq!(fields.get("A"), Some(""));
        assert!(fields.contains_key("A"));
        assert!(!fields.contains_key("B"));
    }
}
