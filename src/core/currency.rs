//! Currency codes, rate edges and the conversion contract

use crate::core::error::{ConversionError, InputError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A three letter currency code, stored in upper case.
///
/// Construction normalizes case, so `usd` and `USD` are the same key
/// everywhere: in the rate graph, in lookups and in the identity check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code without validating its format.
    pub fn new(code: &str) -> Self {
        CurrencyCode(code.trim().to_ascii_uppercase())
    }

    /// Creates a code, rejecting anything that is not exactly three ASCII letters.
    pub fn parse(code: &str) -> Result<Self, InputError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InputError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> String {
        code.0
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        CurrencyCode::new(code)
    }
}

/// A directed conversion rate: `amount_in_to = amount_in_from * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEdge {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
}

impl RateEdge {
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>, rate: f64) -> Self {
        RateEdge {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }

    /// Checks the rate is a positive, finite multiplier.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(InputError::InvalidRate {
                from: self.from.to_string(),
                to: self.to.to_string(),
                rate: self.rate,
            });
        }
        Ok(())
    }
}

impl Display for RateEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.from, self.to, self.rate)
    }
}

/// Parses the `FROM:TO:RATE` form, e.g. `USD:JPY:151.2`.
impl FromStr for RateEdge {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [from, to, rate] = parts.as_slice() else {
            return Err(InputError::MalformedRate(s.to_string()));
        };
        let rate: f64 = rate
            .trim()
            .parse()
            .map_err(|_| InputError::MalformedRate(s.to_string()))?;

        let edge = RateEdge {
            from: CurrencyCode::parse(from)?,
            to: CurrencyCode::parse(to)?,
            rate,
        };
        edge.validate()?;
        Ok(edge)
    }
}

/// The conversion contract exposed to hosts (CLI, services, tests).
pub trait CurrencyConverter: Send + Sync {
    /// Removes every configured rate.
    fn clear_configuration(&self);

    /// Inserts or replaces the given rates, in order.
    fn update_configuration(&self, rates: &[RateEdge]);

    /// Converts `amount` from one currency to another.
    fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConversionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_normalized_to_upper_case() {
        assert_eq!(CurrencyCode::new("usd"), CurrencyCode::new("USD"));
        assert_eq!(CurrencyCode::new(" eur ").as_str(), "EUR");
    }

    #[test]
    fn test_code_parse_rejects_bad_format() {
        assert!(CurrencyCode::parse("US").is_err());
        assert!(CurrencyCode::parse("USDX").is_err());
        assert!(CurrencyCode::parse("U5D").is_err());
        assert_eq!(CurrencyCode::parse("gbp").unwrap().as_str(), "GBP");
    }

    #[test]
    fn test_rate_edge_from_str() {
        let edge: RateEdge = "usd:jpy:151.2".parse().unwrap();
        assert_eq!(edge, RateEdge::new("USD", "JPY", 151.2));
        assert_eq!(edge.to_string(), "USD:JPY:151.2");
    }

    #[test]
    fn test_rate_edge_from_str_errors() {
        assert!(matches!(
            "USD:JPY".parse::<RateEdge>(),
            Err(InputError::MalformedRate(_))
        ));
        assert!(matches!(
            "USD:JPY:abc".parse::<RateEdge>(),
            Err(InputError::MalformedRate(_))
        ));
        assert!(matches!(
            "USD:JPY:0".parse::<RateEdge>(),
            Err(InputError::InvalidRate { .. })
        ));
        assert!(matches!(
            "USD:JPY:-1.5".parse::<RateEdge>(),
            Err(InputError::InvalidRate { .. })
        ));
        assert!(matches!(
            "USDD:JPY:1.5".parse::<RateEdge>(),
            Err(InputError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_code_deserialization_validates() {
        let code: CurrencyCode = serde_yaml::from_str("cad").unwrap();
        assert_eq!(code.as_str(), "CAD");
        assert!(serde_yaml::from_str::<CurrencyCode>("CANADA").is_err());
    }
}
