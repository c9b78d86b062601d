//! Portuguese invoice QR code payload parsing.
//!
//! Decodes the `CODE:value*CODE:value...` text carried by the QR code on
//! certified Portuguese invoices into a [`PortugalInvoice`]. The payload runs
//! through a fixed pipeline:
//!
//! 1. tokenize into a field dictionary (a duplicated code keeps its last value),
//! 2. check every value against its schema length,
//! 3. check the mandatory codes and at least one tax country region marker,
//! 4. extract up to three tax country regions (I, J, K),
//! 5. assemble the record, coercing amounts to [`rust_decimal::Decimal`].
//!
//! The first failing check aborts the parse.
//!
//! # Example
//!
//! ```
//! use fatura::qr;
//! use fatura::QrParseError;
//!
//! let err = qr::parse("A:123456789").unwrap_err();
//! assert!(matches!(err, QrParseError::InvalidParamFormat(_)));
//! assert_eq!(err.to_string(), "Missing * separator in the qr data string");
//! ```

mod assemble;
mod decimal;
mod regions;
mod schema;
mod tokenizer;
mod validate;

use std::str::FromStr;

use tracing::debug;

use crate::core::{PortugalInvoice, QrParseError};

pub use schema::{REQUIRED_FIELDS, max_length};

/// Parse QR code payload text into an invoice record.
pub fn parse(qr_data: &str) -> Result<PortugalInvoice, QrParseError> {
    if qr_data.is_empty() {
        return Err(QrParseError::NoQrCodeData(
            "No qr code data string passed to the parser".into(),
        ));
    }

    debug!(len = qr_data.len(), "parsing invoice QR code data");
    let result = run_pipeline(qr_data);
    match &result {
        Ok(invoice) => debug!(
            atcud = %invoice.atcud,
            regions = invoice.tax_country_regions.len(),
            "parsed invoice QR code data"
        ),
        Err(err) => debug!(kind = ?err.kind(), error = %err, "rejected invoice QR code data"),
    }
    result
}

/// Parse raw QR code bytes, as delivered by a scanner, into an invoice record.
///
/// The bytes must be UTF-8.
pub fn parse_bytes(qr_data: &[u8]) -> Result<PortugalInvoice, QrParseError> {
    if qr_data.is_empty() {
        return Err(QrParseError::NoQrCodeData(
            "No qr code data string passed to the parser".into(),
        ));
    }
    let text = std::str::from_utf8(qr_data).map_err(|_| {
        QrParseError::InvalidParamFormat("QR code data is not valid UTF-8".into())
    })?;
    parse(text)
}

fn run_pipeline(qr_data: &str) -> Result<PortugalInvoice, QrParseError> {
    let fields = tokenizer::tokenize(qr_data)?;
    validate::check_lengths(&fields)?;
    validate::check_required(&fields)?;
    let regions = regions::extract_regions(&fields)?;
    assemble::assemble(&fields, regions)
}

impl FromStr for PortugalInvoice {
    type Err = QrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
