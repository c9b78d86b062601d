//! # fatura
//!
//! Parser for the payload of Portuguese invoice QR codes, as printed on
//! every certified invoice since the ATCUD rollout.
//!
//! The payload is a `*`-separated list of `CODE:value` sections. Every field
//! is checked against the fixed schema (required codes, maximum lengths,
//! numeric formats) before being mapped onto a [`PortugalInvoice`].
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use fatura::qr;
//! use rust_decimal_macros::dec;
//!
//! let invoice = qr::parse(
//!     "A:123456789*B:999999990*C:PT*D:FS*E:N*F:20210420*G:FS 1/1*H:0*I1:PT*N:3.97*O:30.31*Q:zrVG*R:9999",
//! )
//! .unwrap();
//!
//! assert_eq!(invoice.tax_country_regions[0].tax_country_region, "PT");
//! assert_eq!(invoice.total_document_with_taxes, dec!(30.31));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice record types and the parse error |
//! | `qr` (default) | QR payload tokenizer, schema validation, assembly |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "qr")]
pub mod qr;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
