use crate::utils::error::{LedgerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LedgerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "John Doe").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_finite_number() {
        assert!(validate_finite_number("balance", 5000.00).is_ok());
        assert!(validate_finite_number("balance", -1.0).is_ok());
        assert!(validate_finite_number("balance", f64::NAN).is_err());
        assert!(validate_finite_number("balance", f64::INFINITY).is_err());
    }
}
