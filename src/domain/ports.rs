use super::credentials::{CredentialRequest, ValidationResponse};
use super::payment::{PaymentRequest, PaymentResult};
use crate::error::GatewayResult;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// What the backend answered to a request it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply<T> {
    /// 2xx with a decoded body.
    Accepted(T),
    /// Any other status. `message` comes from the body when it carried one.
    Rejected { status: u16, message: Option<String> },
}

#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn validate_credentials(
        &self,
        request: &CredentialRequest,
    ) -> GatewayResult<GatewayReply<ValidationResponse>>;

    async fn process_payment(
        &self,
        request: &PaymentRequest,
    ) -> GatewayResult<GatewayReply<PaymentResult>>;
}

pub type CheckoutGatewayRef = Arc<dyn CheckoutGateway>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

/// A script element to inject, identified later by its marker attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: Url,
    pub marker: String,
    pub async_load: bool,
}

/// Injects and removes external scripts.
///
/// `load` returns immediately; the resource is fetched in the background and
/// a failed fetch is never reported to the caller.
pub trait ResourceLoader: Send {
    fn load(&mut self, tag: ScriptTag) -> LoadHandle;
    fn unload(&mut self, handle: LoadHandle);
    fn find_marked(&self, marker: &str) -> Option<LoadHandle>;
    fn state(&self, handle: LoadHandle) -> Option<LoadState>;
}

pub type ResourceLoaderBox = Box<dyn ResourceLoader>;

/// A region of the user interface showing progress and result text.
pub trait StatusDisplay: Send {
    fn show(&mut self, text: &str);
}

pub type StatusDisplayBox = Box<dyn StatusDisplay>;
