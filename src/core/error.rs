use thiserror::Error;

/// Errors that can occur while parsing QR code invoice data.
///
/// Every variant carries a human-readable message, which is also its
/// `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrParseError {
    /// No data was given to the parser.
    #[error("{0}")]
    NoQrCodeData(String),

    /// Separators are malformed, a region index is invalid, or a value is
    /// not a decimal where one is expected.
    #[error("{0}")]
    InvalidParamFormat(String),

    /// A value is empty or longer than its schema maximum.
    #[error("{0}")]
    InvalidParamLength(String),

    /// One or more mandatory fields are absent.
    #[error("{0}")]
    MissingRequiredParam(String),

    /// None of the tax country region markers (I1, J1, K1) is present.
    #[error("{0}")]
    NoTaxCountryRegion(String),

    /// A tax country region sub-field index has no amount mapping.
    #[error("{0}")]
    InvalidTaxCountryRegionElement(String),
}

/// Fieldless discriminant of [`QrParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrParseErrorKind {
    NoQrCodeData,
    InvalidParamFormat,
    InvalidParamLength,
    MissingRequiredParam,
    NoTaxCountryRegion,
    InvalidTaxCountryRegionElement,
}

impl QrParseError {
    /// The kind of failure, without its message.
    pub fn kind(&self) -> QrParseErrorKind {
        match self {
            Self::NoQrCodeData(_) => QrParseErrorKind::NoQrCodeData,
            Self::InvalidParamFormat(_) => QrParseErrorKind::InvalidParamFormat,
            Self::InvalidParamLength(_) => QrParseErrorKind::InvalidParamLength,
            Self::MissingRequiredParam(_) => QrParseErrorKind::MissingRequiredParam,
            Self::NoTaxCountryRegion(_) => QrParseErrorKind::NoTaxCountryRegion,
            Self::InvalidTaxCountryRegionElement(_) => {
                QrParseErrorKind::InvalidTaxCountryRegionElement
            }
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::NoQrCodeData(msg)
            | Self::InvalidParamFormat(msg)
            | Self::InvalidParamLength(msg)
            | Self::MissingRequiredParam(msg)
            | Self::NoTaxCountryRegion(msg)
            | Self::InvalidTaxCountryRegionElement(msg) => msg,
        }
    }
}
