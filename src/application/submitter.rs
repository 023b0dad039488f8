use crate::domain::payment::{PaymentForm, PaymentRequest, PaymentResult};
use crate::domain::ports::{CheckoutGatewayRef, GatewayReply};
use crate::domain::session::Session;
use crate::error::{CheckoutError, Result};
use tracing::debug;

pub const PAYMENT_FALLBACK: &str = "Payment declined";

/// Submits card payments authorized by the session's credential token.
pub struct PaymentSubmitter {
    gateway: CheckoutGatewayRef,
}

impl PaymentSubmitter {
    /// Creates a submitter that talks to the given gateway.
    pub fn new(gateway: CheckoutGatewayRef) -> Self {
        Self { gateway }
    }

    /// Builds the payment request, failing without any network call when the
    /// session has no credential token yet.
    pub fn prepare(&self, session: &Session, form: &PaymentForm) -> Result<PaymentRequest> {
        let token = session
            .credential_token()
            .ok_or_else(CheckoutError::missing_credentials)?;
        Ok(PaymentRequest::assemble(token, form))
    }

    /// Sends a prepared request once. No retry.
    pub async fn submit(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        debug!(
            currency = %request.currency_code,
            billing = request.billing_address.is_some(),
            "submitting card payment"
        );

        let reply = self
            .gateway
            .process_payment(request)
            .await
            .map_err(|e| CheckoutError::Payment(e.to_string()))?;

        match reply {
            GatewayReply::Accepted(result) => Ok(result),
            GatewayReply::Rejected { status, message } => {
                debug!(status, "payment rejected");
                Err(CheckoutError::Payment(
                    message.unwrap_or_else(|| PAYMENT_FALLBACK.to_string()),
                ))
            }
        }
    }
}
