use crate::domain::credentials::{CredentialRequest, ValidationResponse};
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{
    CheckoutGateway, GatewayReply, LoadHandle, LoadState, ResourceLoader, ScriptTag,
    StatusDisplay,
};
use crate::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::RwLock;

type Scripted<T> = Result<GatewayReply<T>, String>;

#[derive(Default)]
struct GatewayState {
    validation_replies: VecDeque<Scripted<ValidationResponse>>,
    payment_replies: VecDeque<Scripted<PaymentResult>>,
    validation_requests: Vec<CredentialRequest>,
    payment_requests: Vec<PaymentRequest>,
}

/// A scripted backend that records every request it receives.
///
/// Replies are served in the order they were pushed. When none is left the
/// call fails as if the backend were unreachable. `Clone` shares the script
/// and the recorded requests.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryGateway {
    /// Creates a new gateway with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the reply for the next validation call.
    pub async fn push_validation(&self, reply: GatewayReply<ValidationResponse>) {
        self.state.write().await.validation_replies.push_back(Ok(reply));
    }

    /// Makes the next validation call fail as if the backend were unreachable.
    pub async fn push_validation_failure(&self, reason: &str) {
        self.state
            .write()
            .await
            .validation_replies
            .push_back(Err(reason.to_string()));
    }

    /// Queues the reply for the next payment call.
    pub async fn push_payment(&self, reply: GatewayReply<PaymentResult>) {
        self.state.write().await.payment_replies.push_back(Ok(reply));
    }

    /// Makes the next payment call fail as if the backend were unreachable.
    pub async fn push_payment_failure(&self, reason: &str) {
        self.state
            .write()
            .await
            .payment_replies
            .push_back(Err(reason.to_string()));
    }

    /// Every validation request received so far, oldest first.
    pub async fn validation_requests(&self) -> Vec<CredentialRequest> {
        self.state.read().await.validation_requests.clone()
    }

    /// Every payment request received so far, oldest first.
    pub async fn payment_requests(&self) -> Vec<PaymentRequest> {
        self.state.read().await.payment_requests.clone()
    }

    /// Number of payment calls made, including failed ones.
    pub async fn payment_call_count(&self) -> usize {
        self.state.read().await.payment_requests.len()
    }
}

fn next_reply<T>(queue: &mut VecDeque<Scripted<T>>) -> GatewayResult<GatewayReply<T>> {
    match queue.pop_front() {
        Some(Ok(reply)) => Ok(reply),
        Some(Err(reason)) => Err(GatewayError::Unavailable(reason)),
        None => Err(GatewayError::Unavailable("no scripted reply".to_string())),
    }
}

#[async_trait]
impl CheckoutGateway for InMemoryGateway {
    async fn validate_credentials(
        &self,
        request: &CredentialRequest,
    ) -> GatewayResult<GatewayReply<ValidationResponse>> {
        let mut state = self.state.write().await;
        state.validation_requests.push(request.clone());
        next_reply(&mut state.validation_replies)
    }

    async fn process_payment(
        &self,
        request: &PaymentRequest,
    ) -> GatewayResult<GatewayReply<PaymentResult>> {
        let mut state = self.state.write().await;
        state.payment_requests.push(request.clone());
        next_reply(&mut state.payment_replies)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct DocumentState {
    next_handle: u64,
    injections: usize,
    scripts: Vec<(LoadHandle, ScriptTag, LoadState)>,
}

/// A stand-in for the page's document: keeps injected script tags in order.
///
/// Nothing is fetched; tags stay `Loading` until `mark_loaded` is called.
#[derive(Default, Clone)]
pub struct InMemoryDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl InMemoryDocument {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag the way any other script on the page would.
    pub fn insert(&self, tag: ScriptTag) -> LoadHandle {
        let mut state = lock(&self.state);
        state.next_handle += 1;
        state.injections += 1;
        let handle = LoadHandle(state.next_handle);
        state.scripts.push((handle, tag, LoadState::Loading));
        handle
    }

    /// Tags currently on the page, in insertion order.
    pub fn scripts(&self) -> Vec<ScriptTag> {
        lock(&self.state)
            .scripts
            .iter()
            .map(|(_, tag, _)| tag.clone())
            .collect()
    }

    /// Total number of tags ever injected, including removed ones.
    pub fn injection_count(&self) -> usize {
        lock(&self.state).injections
    }

    /// Simulates the browser finishing the download of `handle`.
    pub fn mark_loaded(&self, handle: LoadHandle) {
        let mut state = lock(&self.state);
        if let Some((_, _, load_state)) = state.scripts.iter_mut().find(|(h, _, _)| *h == handle) {
            *load_state = LoadState::Loaded;
        }
    }
}

impl ResourceLoader for InMemoryDocument {
    fn load(&mut self, tag: ScriptTag) -> LoadHandle {
        self.insert(tag)
    }

    fn unload(&mut self, handle: LoadHandle) {
        lock(&self.state).scripts.retain(|(h, _, _)| *h != handle);
    }

    fn find_marked(&self, marker: &str) -> Option<LoadHandle> {
        lock(&self.state)
            .scripts
            .iter()
            .find(|(_, tag, _)| tag.marker == marker)
            .map(|(handle, _, _)| *handle)
    }

    fn state(&self, handle: LoadHandle) -> Option<LoadState> {
        lock(&self.state)
            .scripts
            .iter()
            .find(|(h, _, _)| *h == handle)
            .map(|(_, _, load_state)| *load_state)
    }
}

/// A status region that remembers every text it was given.
#[derive(Default, Clone)]
pub struct RecordingStatus {
    history: Arc<Mutex<Vec<String>>>,
}

impl RecordingStatus {
    /// Creates a new, empty status region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text shown so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        lock(&self.history).clone()
    }

    /// The text currently displayed.
    pub fn current(&self) -> Option<String> {
        lock(&self.history).last().cloned()
    }
}

impl StatusDisplay for RecordingStatus {
    fn show(&mut self, text: &str) {
        lock(&self.history).push(text.to_string());
    }
}
