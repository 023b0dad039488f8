use crate::domain::ports::{LoadHandle, LoadState, ResourceLoader, ScriptTag};
use std::collections::HashMap;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use url::Url;

struct InjectedScript {
    tag: ScriptTag,
    state: watch::Receiver<LoadState>,
    fetch: JoinHandle<()>,
}

/// Fetches injected scripts over HTTP on background tasks.
///
/// Must be used from within a tokio runtime. A failed fetch is logged and the
/// script stays `Loading`; it is never retried.
pub struct HttpScriptLoader {
    client: reqwest::Client,
    next_handle: u64,
    scripts: HashMap<LoadHandle, InjectedScript>,
}

impl HttpScriptLoader {
    /// Creates a loader with no scripts, fetching through `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            next_handle: 0,
            scripts: HashMap::new(),
        }
    }

    /// Waits until the script has loaded. Returns `false` if it was unloaded
    /// or its fetch finished without loading it.
    pub async fn wait_loaded(&self, handle: LoadHandle) -> bool {
        let Some(script) = self.scripts.get(&handle) else {
            return false;
        };
        let mut state = script.state.clone();
        state.wait_for(|s| *s == LoadState::Loaded).await.is_ok()
    }
}

async fn fetch_script(client: reqwest::Client, src: Url, state: watch::Sender<LoadState>) {
    let outcome = match client.get(src.clone()).send().await {
        Ok(response) => match response.error_for_status() {
            Ok(response) => response.bytes().await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    match outcome {
        Ok(body) => {
            info!(%src, bytes = body.len(), "payment SDK script loaded");
            state.send_replace(LoadState::Loaded);
        }
        Err(e) => warn!(%src, error = %e, "payment SDK script failed to load"),
    }
}

impl ResourceLoader for HttpScriptLoader {
    fn load(&mut self, tag: ScriptTag) -> LoadHandle {
        self.next_handle += 1;
        let handle = LoadHandle(self.next_handle);

        let (sender, receiver) = watch::channel(LoadState::Loading);
        let fetch = tokio::spawn(fetch_script(self.client.clone(), tag.src.clone(), sender));

        self.scripts.insert(
            handle,
            InjectedScript {
                tag,
                state: receiver,
                fetch,
            },
        );
        handle
    }

    fn unload(&mut self, handle: LoadHandle) {
        if let Some(script) = self.scripts.remove(&handle) {
            script.fetch.abort();
        }
    }

    fn find_marked(&self, marker: &str) -> Option<LoadHandle> {
        self.scripts
            .iter()
            .find(|(_, script)| script.tag.marker == marker)
            .map(|(handle, _)| *handle)
    }

    fn state(&self, handle: LoadHandle) -> Option<LoadState> {
        self.scripts.get(&handle).map(|script| *script.state.borrow())
    }
}

impl Drop for HttpScriptLoader {
    fn drop(&mut self) {
        for script in self.scripts.values() {
            script.fetch.abort();
        }
    }
}
