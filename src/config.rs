use clap::Args;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_SDK_URL: &str = "https://www.paypal.com/sdk/js";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const VALIDATE_PATH: &str = "/api/credentials/validate";
pub const PAYMENT_PATH: &str = "/api/payment/process";

/// Where the checkout backend and the payment SDK live.
#[derive(Debug, Clone, Args)]
pub struct CheckoutConfig {
    /// Base URL of the checkout backend
    #[arg(long, env = "CARDCHECKOUT_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: Url,

    /// URL of the payment provider's JS SDK (query parameters are added per client id)
    #[arg(long, env = "CARDCHECKOUT_SDK_URL", default_value = DEFAULT_SDK_URL)]
    pub sdk_url: Url,

    /// Timeout applied to every backend request, in seconds
    #[arg(long, env = "CARDCHECKOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl CheckoutConfig {
    /// Creates a configuration for the given backend and SDK URLs with the default timeout.
    pub fn new(api_base_url: Url, sdk_url: Url) -> Self {
        Self {
            api_base_url,
            sdk_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Per-request timeout for backend calls.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL of the credential validation endpoint.
    pub fn validate_url(&self) -> Result<Url, url::ParseError> {
        self.api_base_url.join(VALIDATE_PATH)
    }

    /// Absolute URL of the payment endpoint.
    pub fn payment_url(&self) -> Result<Url, url::ParseError> {
        self.api_base_url.join(PAYMENT_PATH)
    }
}
