//! Validation of conversion requests coming from outside the core.

use crate::core::currency::CurrencyCode;
use crate::core::error::InputError;

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

impl ConvertRequest {
    /// Checks both codes are 3 letters and the amount is positive and finite.
    pub fn parse(from: &str, to: &str, amount: f64) -> Result<Self, InputError> {
        let from = CurrencyCode::parse(from)?;
        let to = CurrencyCode::parse(to)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InputError::InvalidAmount(amount));
        }
        Ok(ConvertRequest { from, to, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = ConvertRequest::parse("usd", "EUR", 10.0).unwrap();
        assert_eq!(request.from.as_str(), "USD");
        assert_eq!(request.to.as_str(), "EUR");
        assert_eq!(request.amount, 10.0);
    }

    #[test]
    fn test_invalid_requests() {
        assert_eq!(
            ConvertRequest::parse("US", "EUR", 10.0),
            Err(InputError::InvalidCurrencyCode("US".to_string()))
        );
        assert!(matches!(
            ConvertRequest::parse("USD", "", 10.0),
            Err(InputError::InvalidCurrencyCode(_))
        ));
        assert_eq!(
            ConvertRequest::parse("USD", "EUR", 0.0),
            Err(InputError::InvalidAmount(0.0))
        );
        assert!(ConvertRequest::parse("USD", "EUR", -5.0).is_err());
        assert!(ConvertRequest::parse("USD", "EUR", f64::NAN).is_err());
    }
}
