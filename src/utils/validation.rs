use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Sign is not checked: negative prices and dimensions flow into the sums as-is.
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DemoError::InvalidConfigValueError {
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
        assert!(validate_non_empty_string("order.customer", "rahulreza920").is_ok());
        assert!(validate_non_empty_string("order.customer", "").is_err());
        assert!(validate_non_empty_string("order.customer", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("shapes[0].width", 2.0).is_ok());
        assert!(validate_finite("shapes[0].width", -2.0).is_ok());
        assert!(validate_finite("shapes[0].width", f64::NAN).is_err());
        assert!(validate_finite("shapes[0].width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_carries_field_name() {
        let err = validate_finite("order.items[0].unit_price", f64::NEG_INFINITY).unwrap_err();
        match err {
            DemoError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "order.items[0].unit_price")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
