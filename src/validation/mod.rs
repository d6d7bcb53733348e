//! Boundary checks applied to incoming payloads before they reach the rule engine.

use std::fmt;

use crate::domain::ValidationRequest;

pub const CURRENCY_CODE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type FieldResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

/// Length in characters, not bytes.
pub fn validate_exact_len(field: &'static str, value: &str, len: usize) -> FieldResult {
    if value.chars().count() != len {
        return Err(ValidationError::new(
            field,
            format!("must be exactly {} characters", len),
        ));
    }

    Ok(())
}

pub fn validate_positive_amount(amount: f64) -> FieldResult {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::new("amount", "must be greater than zero"));
    }

    Ok(())
}

/// Checks every required field of a validation request, stopping at the first
/// problem.
pub fn validate_request(request: &ValidationRequest) -> FieldResult {
    validate_required("transaction_id", &request.transaction_id)?;
    validate_required("type", &request.kind)?;
    validate_positive_amount(request.amount)?;
    validate_exact_len("currency", &request.currency, CURRENCY_CODE_LEN)?;
    validate_required("counterparty.id", &request.counterparty.id)?;
    validate_required("counterparty.name", &request.counterparty.name)?;
    validate_required("counterparty.type", &request.counterparty.kind)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Counterparty;

    fn valid_request() -> ValidationRequest {
        ValidationRequest::new(
            "txn-1",
            "PAYMENT",
            100.0,
            "USD",
            Counterparty::new("cp-1", "Acme", "BUSINESS"),
        )
    }

    #[test]
    fn test_validates_required_field() {
        assert!(validate_required("field", "value").is_ok());
        assert!(validate_required("field", "   ").is_err());
    }

    #[test]
    fn test_validates_exact_len() {
        assert!(validate_exact_len("currency", "USD", 3).is_ok());
        assert!(validate_exact_len("currency", "US", 3).is_err());
        assert!(validate_exact_len("currency", "USDT", 3).is_err());
        assert!(validate_exact_len("currency", "€€€", 3).is_ok());
    }

    #[test]
    fn test_validates_positive_amount() {
        assert!(validate_positive_amount(1.23).is_ok());
        assert!(validate_positive_amount(0.0).is_err());
        assert!(validate_positive_amount(-1.0).is_err());
        assert!(validate_positive_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_accepts_complete_request() {
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_reports_first_missing_field() {
        let mut request = valid_request();
        request.counterparty.id.clear();
        request.counterparty.name.clear();

        let err = validate_request(&request).unwrap_err();
        assert_eq!(err.field, "counterparty.id");
    }

    #[test]
    fn test_rejects_bad_currency_length() {
        let mut request = valid_request();
        request.currency = "DOLLARS".to_string();

        let err = validate_request(&request).unwrap_err();
        assert_eq!(err.to_string(), "currency: must be exactly 3 characters");
    }
}
