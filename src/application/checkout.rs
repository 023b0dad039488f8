use crate::application::script_loader::SdkScriptLoader;
use crate::application::submitter::PaymentSubmitter;
use crate::application::validator::CredentialValidator;
use crate::domain::credentials::{CredentialForm, ValidatedCredentials};
use crate::domain::payment::{PaymentForm, PaymentResult};
use crate::domain::ports::{CheckoutGatewayRef, ResourceLoaderBox, StatusDisplayBox};
use crate::domain::session::Session;
use crate::error::Result;
use url::Url;

pub const VALIDATING_STATUS: &str = "Validating credentials with the payment provider...";
pub const PAYING_STATUS: &str = "Sending card payment to the payment provider...";

/// The checkout page: both forms, their status regions, and the session they share.
///
/// Every submission writes a terminal status text, success or failure, to the
/// status region of its form before the result is handed back.
pub struct Checkout {
    session: Session,
    validator: CredentialValidator,
    submitter: PaymentSubmitter,
    scripts: SdkScriptLoader,
    credential_status: StatusDisplayBox,
    payment_status: StatusDisplayBox,
}

impl Checkout {
    /// Creates a new `Checkout` with an empty session.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The backend both forms submit to.
    /// * `loader` - Where the payment SDK script gets injected.
    /// * `sdk_url` - Base URL of the payment SDK script.
    /// * `credential_status` - Status region of the credential form.
    /// * `payment_status` - Status region of the payment form.
    pub fn new(
        gateway: CheckoutGatewayRef,
        loader: ResourceLoaderBox,
        sdk_url: Url,
        credential_status: StatusDisplayBox,
        payment_status: StatusDisplayBox,
    ) -> Self {
        Self {
            session: Session::new(),
            validator: CredentialValidator::new(gateway.clone()),
            submitter: PaymentSubmitter::new(gateway),
            scripts: SdkScriptLoader::new(loader, sdk_url),
            credential_status,
            payment_status,
        }
    }

    /// Returns the current credential session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the SDK script loader.
    pub fn scripts(&self) -> &SdkScriptLoader {
        &self.scripts
    }

    /// Validates the credential form, reporting progress and the outcome in the
    /// credential status region.
    pub async fn submit_credentials(&mut self, form: CredentialForm) -> Result<ValidatedCredentials> {
        self.credential_status.show(VALIDATING_STATUS);

        let outcome = self
            .validator
            .validate(&mut self.session, &mut self.scripts, &form)
            .await;

        match &outcome {
            Ok(accepted) => self.credential_status.show(&accepted.to_string()),
            Err(e) => self.credential_status.show(&e.to_string()),
        }
        outcome
    }

    /// Submits the payment form, reporting progress and the outcome in the
    /// payment status region.
    ///
    /// Without a validated session the precondition error is shown and no progress
    /// status is displayed.
    pub async fn submit_payment(&mut self, form: PaymentForm) -> Result<PaymentResult> {
        let request = match self.submitter.prepare(&self.session, &form) {
            Ok(request) => request,
            Err(e) => {
                self.payment_status.show(&e.to_string());
                return Err(e);
            }
        };

        self.payment_status.show(PAYING_STATUS);
        let outcome = self.submitter.submit(&request).await;

        match &outcome {
            Ok(result) => self.payment_status.show(&result.to_string()),
            Err(e) => self.payment_status.show(&e.to_string()),
        }
        outcome
    }
}
