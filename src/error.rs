use thiserror::Error;

/// Failure of one user-facing checkout action.
///
/// The `Display` output is the text shown in the status region of the form
/// that triggered the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Credentials were rejected or the validation request could not be made.
    #[error("Validation error: {0}")]
    Validation(String),
    /// A payment was attempted before any credentials were validated.
    #[error("{0}")]
    Precondition(String),
    /// The payment was declined or the payment request could not be made.
    #[error("Payment failed: {0}")]
    Payment(String),
}

impl CheckoutError {
    /// The error for a payment attempted before a credential token exists.
    pub fn missing_credentials() -> Self {
        Self::Precondition("Validate credentials first.".to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Failure reported by a `CheckoutGateway` adapter before any reply was read.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization/Deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
