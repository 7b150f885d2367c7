//! Core conversion logic and abstractions

pub mod config;
pub mod converter;
pub mod currency;
pub mod error;
pub mod log;
pub mod request;

// Re-export main types for cleaner imports
pub use converter::{ConversionPath, Hop, PathConverter};
pub use currency::{CurrencyCode, CurrencyConverter, RateEdge};
pub use error::{ConversionError, InputError};
