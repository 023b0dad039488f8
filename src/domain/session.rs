/// Credentials accepted during the current checkout session.
///
/// Starts empty and is only written by a successful credential validation.
/// Nothing ever clears it; a fresh `Session` is a fresh page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    credential_token: Option<String>,
    client_id: Option<String>,
}

impl Session {
    /// Creates a new, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token returned by the last successful validation.
    pub fn credential_token(&self) -> Option<&str> {
        self.credential_token.as_deref()
    }

    /// Trimmed client id of the last successful validation.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Whether a credential token is held.
    pub fn is_validated(&self) -> bool {
        self.credential_token.is_some()
    }

    /// Replaces both fields with the outcome of a successful validation.
    pub fn record_validation(&mut self, credential_token: String, client_id: String) {
        self.credential_token = Some(credential_token);
        self.client_id = Some(client_id);
    }
}
