use crate::application::script_loader::SdkScriptLoader;
use crate::domain::credentials::{
    CredentialForm, CredentialRequest, ValidatedCredentials, ValidationResult,
};
use crate::domain::ports::{CheckoutGatewayRef, GatewayReply};
use crate::domain::session::Session;
use crate::error::{CheckoutError, Result};
use tracing::debug;

pub const VALIDATION_FALLBACK: &str = "Validation failed";

/// Exchanges merchant credentials for a credential token.
pub struct CredentialValidator {
    gateway: CheckoutGatewayRef,
}

impl CredentialValidator {
    /// Creates a validator that talks to the given gateway.
    pub fn new(gateway: CheckoutGatewayRef) -> Self {
        Self { gateway }
    }

    /// Validates `form` against the backend.
    ///
    /// On success the session holds the returned token and the trimmed client id,
    /// and the payment SDK is (re)loaded for that client id. On failure neither
    /// the session nor the loaded scripts change.
    pub async fn validate(
        &self,
        session: &mut Session,
        scripts: &mut SdkScriptLoader,
        form: &CredentialForm,
    ) -> Result<ValidatedCredentials> {
        let request = CredentialRequest::from(form);
        debug!(
            client_id = %request.client_id,
            environment = %request.environment,
            "validating merchant credentials"
        );

        let reply = self
            .gateway
            .validate_credentials(&request)
            .await
            .map_err(|e| CheckoutError::Validation(e.to_string()))?;

        let response = match reply {
            GatewayReply::Accepted(response) => response,
            GatewayReply::Rejected { message, .. } => {
                return Err(rejected(message));
            }
        };

        match ValidationResult::from(response) {
            ValidationResult::Invalid { message } => Err(rejected(message)),
            ValidationResult::Valid {
                credential_token,
                environment,
            } => {
                session.record_validation(credential_token, request.client_id.clone());
                scripts.load(&request.client_id);

                // The backend's echo wins; the submitted label only fills a gap.
                let environment = environment.unwrap_or_else(|| request.environment.clone());
                Ok(ValidatedCredentials::new(request.client_id, &environment))
            }
        }
    }
}

fn rejected(message: Option<String>) -> CheckoutError {
    CheckoutError::Validation(message.unwrap_or_else(|| VALIDATION_FALLBACK.to_string()))
}
