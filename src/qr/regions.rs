use crate::core::{QrParseError, TaxCountryRegion, TaxRegionField};

use super::decimal::parse_decimal;
use super::schema::{REGION_LETTERS, region_key};
use super::tokenizer::FieldDictionary;

/// Collect the tax country regions present in the payload, in I, J, K order.
///
/// A letter whose marker (`x1`) is absent yields no region. Sub-fields 2-8
/// are optional and stay `None` when absent.
pub(crate) fn extract_regions(
    fields: &FieldDictionary<'_>,
) -> Result<Vec<TaxCountryRegion>, QrParseError> {
    let mut regions = Vec::new();
    for letter in REGION_LETTERS {
        let Some(code) = fields.get(&region_key(letter, 1)) else {
            continue;
        };

        let mut region = TaxCountryRegion::new(code);
        for index in 2..=8u8 {
            let key = region_key(letter, index);
            let Some(raw) = fields.get(&key) else {
                continue;
            };

            let amount = parse_decimal(raw).ok_or_else(|| {
                QrParseError::InvalidParamFormat(format!(
                    "A valid decimal number is required for param {key}"
                ))
            })?;
            let field = TaxRegionField::from_index(index).ok_or_else(|| {
                QrParseError::InvalidTaxCountryRegionElement(
                    "Invalid tax country region element".into(),
                )
            })?;
            *region.amount_slot_mut(field) = Some(amount);
        }
        regions.push(region);
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::tokenizer::tokenize;
    use rust_decimal_macros::dec;

    #[test]
    fn marker_only_region() {
        let fields = tokenize("A:1*I1:PT").unwrap();
        let regions = extract_regions(&fields).unwrap();
        assert_eq!(regions, vec![TaxCountryRegion::new("PT")]);
    }

    #[test]
    fn sub_fields_map_by_position() {
        let fields = tokenize(
            "I1:PT*I2:1.00*I3:2.00*I4:0.12*I5:3.00*I6:0.39*I7:4.00*I8:0.92",
        )
        .unwrap();
        let regions = extract_regions(&fields).unwrap();
        let pt = &regions[0];
        assert_eq!(pt.taxable_base_exempt, Some(dec!(1.00)));
        assert_eq!(pt.taxable_base_reduced_rate, Some(dec!(2.00)));
        assert_eq!(pt.total_vat_reduced_rate, Some(dec!(0.12)));
        assert_eq!(pt.taxable_base_intermediate_rate, Some(dec!(3.00)));
        assert_eq!(pt.total_vat_intermediate_rate, Some(dec!(0.39)));
        assert_eq!(pt.taxable_base_standard_rate, Some(dec!(4.00)));
        assert_eq!(pt.total_vat_standard_rate, Some(dec!(0.92)));
    }

    #[test]
    fn absent_sub_fields_stay_unset() {
        let fields = tokenize("I1:PT*I7:26.34*I8:6.06").unwrap();
        let regions = extract_regions(&fields).unwrap();
        let pt = &regions[0];
        assert_eq!(pt.taxable_base_exempt, None);
        assert_eq!(pt.total_vat_reduced_rate, None);
        assert_eq!(pt.taxable_base_standard_rate, Some(dec!(26.34)));
        assert_eq!(pt.total_vat_standard_rate, Some(dec!(6.06)));
    }

    #[test]
    fn regions_in_letter_order() {
        let fields = tokenize("K1:PT-MA*I1:PT*J1:PT-AC*J8:1.80").unwrap();
        let regions = extract_regions(&fields).unwrap();
        let codes: Vec<_> = regions
            .iter()
            .map(|r| r.tax_country_region.as_str())
            .collect();
        assert_eq!(codes, vec!["PT", "PT-AC", "PT-MA"]);
        assert_eq!(regions[1].total_vat_standard_rate, Some(dec!(1.80)));
    }

    #[test]
    fn sub_fields_without_marker_are_ignored() {
        let fields = tokenize("I1:PT*J7:10.00*J8:2.30").unwrap();
        let regions = extract_regions(&fields).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].tax_country_region, "PT");
    }

    #[test]
    fn invalid_amount_names_the_param() {
        let fields = tokenize("I1:PT*J1:ES*J4:1,50").unwrap();
        let err = extract_regions(&fields).unwrap_err();
        assert_eq!(
            err,
            QrParseError::InvalidParamFormat(
                "A valid decimal number is required for param J4".into()
            )
        );
    }

    #[test]
    fn no_markers_no_regions() {
        let fields = tokenize("A:1*B:2").unwrap();
        assert!(extract_regions(&fields).unwrap().is_empty());
    }
}
