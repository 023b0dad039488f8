use crate::config::CheckoutConfig;
use crate::domain::credentials::{CredentialRequest, ValidationResponse};
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{CheckoutGateway, GatewayReply};
use crate::error::GatewayResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Error body of a non-2xx reply. Every other field is ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The checkout backend reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpCheckoutGateway {
    client: reqwest::Client,
    validate_url: Url,
    payment_url: Url,
}

impl HttpCheckoutGateway {
    /// Builds a gateway with its own HTTP client using the configured timeout.
    pub fn new(config: &CheckoutConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Self::with_client(client, config)
    }

    /// Builds a gateway on top of an existing client, e.g. one shared with the SDK loader.
    pub fn with_client(client: reqwest::Client, config: &CheckoutConfig) -> GatewayResult<Self> {
        Ok(Self {
            client,
            validate_url: config.validate_url()?,
            payment_url: config.payment_url()?,
        })
    }

    async fn post<Req, Res>(&self, url: &Url, body: &Req) -> GatewayResult<GatewayReply<Res>>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status();

        let text = response.text().await?;

        if status.is_success() {
            return Ok(GatewayReply::Accepted(serde_json::from_str::<Res>(&text)?));
        }

        // Non-JSON error bodies fall back to the caller's generic message.
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);
        debug!(%url, status = status.as_u16(), "backend rejected request");

        Ok(GatewayReply::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    async fn validate_credentials(
        &self,
        request: &CredentialRequest,
    ) -> GatewayResult<GatewayReply<ValidationResponse>> {
        self.post(&self.validate_url, request).await
    }

    async fn process_payment(
        &self,
        request: &PaymentRequest,
    ) -> GatewayResult<GatewayReply<PaymentResult>> {
        self.post(&self.payment_url, request).await
    }
}
