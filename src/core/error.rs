//! Error types for conversion and input validation.

use crate::core::currency::CurrencyCode;
use thiserror::Error;

/// Errors raised by the path converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The traversal exhausted the graph without reaching the target.
    #[error("Cannot find a conversion path from {from} to {to}")]
    NoConversionPath { from: CurrencyCode, to: CurrencyCode },
}

/// Errors raised while validating input before it reaches the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid currency code '{0}': expected 3 letters")]
    InvalidCurrencyCode(String),

    #[error("Invalid rate {rate} for {from} -> {to}: rate must be positive")]
    InvalidRate { from: String, to: String, rate: f64 },

    #[error("Malformed rate '{0}': expected FROM:TO:RATE")]
    MalformedRate(String),

    #[error("Invalid amount {0}: amount must be positive")]
    InvalidAmount(f64),
}
