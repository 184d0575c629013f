//! Error types for the pricing engine and its callers.

/// Errors that can occur while costing or pricing a product.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// A numeric input violated a precondition (negative, non-finite,
    /// loss fraction of 100% or more, empty batch, overflow).
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Fees and margin leave nothing of the price to cover costs.
    #[error("Price cannot be solved: {reason}")]
    Unsolvable { reason: String },

    /// Configuration value could not be parsed.
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON quote request.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PricingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for data-entry errors the user can correct.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput { .. })
    }
}

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
