use rust_decimal::Decimal;

use crate::core::{PortugalInvoice, QrParseError, TaxCountryRegion};

use super::decimal::parse_decimal;
use super::tokenizer::FieldDictionary;

/// Map validated fields onto the invoice record.
pub(crate) fn assemble(
    fields: &FieldDictionary<'_>,
    tax_country_regions: Vec<TaxCountryRegion>,
) -> Result<PortugalInvoice, QrParseError> {
    let text = |code: &str| required(fields, code).map(str::to_owned);
    let amount = |code: &str| fields.get(code).map(decimal_value).transpose();

    Ok(PortugalInvoice {
        remitent_nif: text("A")?,
        client_nif: text("B")?,
        client_country: text("C")?,
        document_type: text("D")?,
        document_status: text("E")?,
        document_date: text("F")?,
        document_id: text("G")?,
        atcud: text("H")?,
        tax_country_regions,
        not_taxable_in_vat: amount("L")?,
        stamp_duty: amount("M")?,
        total_taxes: decimal_value(required(fields, "N")?)?,
        total_document_with_taxes: decimal_value(required(fields, "O")?)?,
        withholding_taxes: amount("P")?.unwrap_or(Decimal::ZERO),
        hash: text("Q")?,
        certificate_number: text("R")?,
        other_information: fields.get("S").map(str::to_owned),
    })
}

fn required<'a>(fields: &FieldDictionary<'a>, code: &str) -> Result<&'a str, QrParseError> {
    fields.get(code).ok_or_else(|| {
        QrParseError::MissingRequiredParam(format!("Missing the required params: {code}"))
    })
}

fn decimal_value(raw: &str) -> Result<Decimal, QrParseError> {
    parse_decimal(raw).ok_or_else(|| QrParseError::InvalidParamFormat("Expected decimal value".into()))
}
