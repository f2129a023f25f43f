//! # Error Types
//!
//! Domain-specific error types for rawconnect-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rawconnect-core errors (this file)                                    │
//! │  ├── CoreError        - Lookups and domain failures                    │
//! │  └── ValidationError  - Add-product form failures                      │
//! │                                                                         │
//! │  rawconnect-app errors (separate crate)                                │
//! │  ├── ConfigError      - Config file loading                            │
//! │  └── ApiError         - What the console prints (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No supplier with this id in the directory.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(u32),

    /// Supplier exists but has no offer at this position.
    #[error("Supplier {supplier_id} has no offer #{index}")]
    OfferNotFound { supplier_id: u32, index: usize },

    /// Status text is not one of the known order/product statuses.
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning the free-text add-product form into a [`Product`].
///
/// [`Product`]: crate::types::Product
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty.
    ///
    /// The message matches the notification the supplier sees.
    #[error("Please fill in all required fields")]
    Required { fields: Vec<String> },

    /// Field does not parse as a whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Field parsed but is negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_matches_notification() {
        let err = ValidationError::Required {
            fields: vec!["name".to_string()],
        };
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a whole number, got 'abc'");

        let err = CoreError::OfferNotFound {
            supplier_id: 2,
            index: 7,
        };
        assert_eq!(err.to_string(), "Supplier 2 has no offer #7");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
