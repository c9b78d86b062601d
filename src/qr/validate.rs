use crate::core::QrParseError;

use super::schema::{
    REGION_LETTERS, REQUIRED_FIELDS, field_max_length, is_region_key, region_index, region_key,
    region_max_length,
};
use super::tokenizer::FieldDictionary;

/// Check every field value against its schema length.
///
/// Region keys must carry an index within 1-8. Codes outside the schema
/// have no maximum but must still be non-empty.
pub(crate) fn check_lengths(fields: &FieldDictionary<'_>) -> Result<(), QrParseError> {
    for (key, value) in fields.iter() {
        let max = if is_region_key(key) {
            Some(region_max_length(region_index(key)?))
        } else {
            field_max_length(key)
        };

        let len = value.chars().count();
        if let Some(max) = max {
            if len > max {
                return Err(QrParseError::InvalidParamLength(format!(
                    "Param {key} exceeds the max length of {max}"
                )));
            }
        }
        if len == 0 {
            return Err(QrParseError::InvalidParamLength(format!(
                "Param {key} has a length of 0 characters"
            )));
        }
    }
    Ok(())
}

/// Check that all mandatory fields and at least one region marker exist.
pub(crate) fn check_required(fields: &FieldDictionary<'_>) -> Result<(), QrParseError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|code| !fields.contains_key(code))
        .collect();
    if !missing.is_empty() {
        return Err(QrParseError::MissingRequiredParam(format!(
            "Missing the required params: {}",
            missing.join(", ")
        )));
    }

    let has_region = REGION_LETTERS
        .iter()
        .any(|&letter| fields.contains_key(&region_key(letter, 1)));
    if !has_region {
        return Err(QrParseError::NoTaxCountryRegion(
            "A ticket must have at least one tax country region".into(),
        ));
    }
    Ok(())
}
