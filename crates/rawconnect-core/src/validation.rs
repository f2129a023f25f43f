//! # Validation Module
//!
//! Turns the free-text add-product form into typed values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Add-Product Validation                             │
//! │                                                                         │
//! │  Step 1: Presence                                                      │
//! │  ├── name, price, stock must be non-blank                              │
//! │  └── any missing → Required (one message for all of them)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: Parse                                                         │
//! │  ├── price, stock must be whole numbers                                │
//! │  └── must not be negative                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 3: Unit                                                          │
//! │  └── kg | liter | piece | packet                                       │
//! │                                                                         │
//! │  Category and description are free text and never rejected.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rawconnect_core::validation::{parse_price, parse_stock};
//!
//! assert_eq!(parse_price("18").unwrap().rupees(), 18);
//! assert_eq!(parse_stock(" 200 ").unwrap(), 200);
//! assert!(parse_price("eighteen").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Presence
// =============================================================================

/// Checks that every `(field, value)` pair is non-blank.
///
/// All missing fields are collected so the caller can report them together.
pub fn require_fields(fields: &[(&str, &str)]) -> ValidationResult<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Required { fields: missing })
    }
}

// =============================================================================
// Numeric Parsing
// =============================================================================

/// Parses a non-negative whole number typed into a form field.
pub fn parse_whole_number(field: &str, value: &str) -> ValidationResult<i64> {
    let trimmed = value.trim();

    let n = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: trimmed.to_string(),
        })?;

    if n < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(n)
}

/// Parses the "Price per unit" field.
///
/// Zero is allowed (free samples).
pub fn parse_price(value: &str) -> ValidationResult<Money> {
    parse_whole_number("price", value).map(Money::from_rupees)
}

/// Parses the "Stock Quantity" field.
pub fn parse_stock(value: &str) -> ValidationResult<i64> {
    parse_whole_number("stock", value)
}

/// Trims free text and maps blank to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_collects_all_missing() {
        assert!(require_fields(&[("name", "Red Onions"), ("price", "18")]).is_ok());

        let err = require_fields(&[("name", ""), ("price", "18"), ("stock", "  ")]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                fields: vec!["name".to_string(), "stock".to_string()]
            }
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("18").unwrap(), Money::from_rupees(18));
        assert_eq!(parse_price("0").unwrap(), Money::zero());
        assert!(parse_price("-1").is_err());
        assert!(parse_price("18.5").is_err());
        assert!(parse_price("abc").is_err());
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("200").unwrap(), 200);
        assert_eq!(
            parse_stock("-3").unwrap_err(),
            ValidationError::MustBeNonNegative {
                field: "stock".to_string()
            }
        );
        assert!(matches!(
            parse_stock("lots").unwrap_err(),
            ValidationError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" farm fresh "), Some("farm fresh".to_string()));
    }
}
