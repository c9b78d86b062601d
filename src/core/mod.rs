//! Core invoice record types and the parse error.
//!
//! This module provides the output of the QR parser: the invoice record
//! with its per-region tax breakdown, and the error taxonomy.

mod error;
mod types;

pub use error::*;
pub use types::*;
