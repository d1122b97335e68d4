//! Error types for the MzuniPay library

use thiserror::Error;

/// Result type alias for MzuniPay operations
pub type Result<T> = std::result::Result<T, MzuniPayError>;

/// Message used when a rejected payment carries no usable `message` field
pub const PAYMENT_FAILED_FALLBACK: &str = "Payment failed.";

/// Main error type for MzuniPay operations
#[derive(Error, Debug)]
pub enum MzuniPayError {
    /// Missing API key or unusable base URL
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The mount target for the payment form does not exist
    #[error("Container element not found: {container_id}")]
    Mount { container_id: String },

    /// The payment service rejected the payment.
    ///
    /// Displays exactly the server-supplied message so it can be shown to the payer.
    #[error("{message}")]
    Payment { message: String },

    /// A form field was read from a container that has no mounted form
    #[error("Form field not mounted: {field}")]
    MissingField { field: &'static str },

    /// The amount entered in the form is not a number
    #[error("Invalid amount: {value:?}")]
    InvalidAmount { value: String },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL parse error
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MzuniPayError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a mount error for the given container id
    pub fn mount(container_id: impl Into<String>) -> Self {
        Self::Mount {
            container_id: container_id.into(),
        }
    }

    /// Create a payment rejection error
    pub fn payment(message: impl Into<String>) -> Self {
        Self::Payment {
            message: message.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
        }
    }

    /// Whether the remote service rejected the payment
    pub fn is_payment_rejection(&self) -> bool {
        matches!(self, Self::Payment { .. })
    }

    /// Whether the failure happened on the wire rather than in the service
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_) | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_error_displays_bare_message() {
        let error = MzuniPayError::payment("Insufficient funds");
        assert_eq!(error.to_string(), "Insufficient funds");
        assert!(error.is_payment_rejection());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_config_error_display() {
        let error = MzuniPayError::config("API Key is required.");
        assert_eq!(
            error.to_string(),
            "Configuration error: API Key is required."
        );
    }

    #[test]
    fn test_json_error_is_transport() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = MzuniPayError::from(json_error);
        assert!(error.is_transport());
        assert!(!error.is_payment_rejection());
    }
}
