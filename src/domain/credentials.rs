use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long the backend keeps a credential token alive after validation.
pub const TOKEN_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Credential form fields as the merchant typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialForm {
    pub client_id: String,
    pub client_secret: String,
    pub environment: String,
}

/// Body of `POST /api/credentials/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub client_id: String,
    pub client_secret: String,
    pub environment: String,
}

impl From<&CredentialForm> for CredentialRequest {
    /// Trims the id and secret; the environment is sent exactly as entered.
    fn from(form: &CredentialForm) -> Self {
        Self {
            client_id: form.client_id.trim().to_string(),
            client_secret: form.client_secret.trim().to_string(),
            environment: form.environment.clone(),
        }
    }
}

/// Body returned by the validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of a validation, with the token present exactly when it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid {
        credential_token: String,
        environment: Option<String>,
    },
    Invalid {
        message: Option<String>,
    },
}

impl From<ValidationResponse> for ValidationResult {
    fn from(response: ValidationResponse) -> Self {
        match response {
            ValidationResponse {
                valid: true,
                credential_token: Some(credential_token),
                environment,
                ..
            } => Self::Valid {
                credential_token,
                environment,
            },
            ValidationResponse { message, .. } => Self::Invalid { message },
        }
    }
}

/// Credentials the backend accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCredentials {
    pub client_id: String,
    /// Environment label as echoed by the backend, lowercased.
    pub environment: String,
}

impl ValidatedCredentials {
    /// Creates the success record for `client_id` in the given environment.
    ///
    /// Unknown labels are kept; only case and surrounding whitespace are normalized.
    pub fn new(client_id: String, environment: &str) -> Self {
        Self {
            client_id,
            environment: environment.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for ValidatedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credentials accepted ({}). Token expires in ~{}h.",
            self.environment,
            TOKEN_TTL.as_secs() / 3600
        )
    }
}
