use crate::domain::ports::{LoadHandle, LoadState, ResourceLoaderBox, ScriptTag};
use tracing::debug;
use url::Url;

/// Marker attribute carried by the injected SDK script tag.
pub const SDK_MARKER: &str = "data-payment-sdk";
/// UI components requested from the SDK.
pub const SDK_COMPONENTS: &str = "buttons,funding-eligibility";

/// Keeps at most one payment SDK script loaded, for the latest client id.
pub struct SdkScriptLoader {
    loader: ResourceLoaderBox,
    sdk_url: Url,
}

impl SdkScriptLoader {
    /// Creates an SDK loader injecting scripts through `loader`, rooted at `sdk_url`.
    pub fn new(loader: ResourceLoaderBox, sdk_url: Url) -> Self {
        Self { loader, sdk_url }
    }

    /// The SDK URL for `client_id`, replacing any query on the configured base.
    pub fn script_url(&self, client_id: &str) -> Url {
        let mut url = self.sdk_url.clone();
        url.set_query(Some(&format!(
            "client-id={}&components={}",
            urlencoding::encode(client_id),
            SDK_COMPONENTS
        )));
        url
    }

    /// Removes the previously injected SDK script, if any, and injects a fresh one.
    pub fn load(&mut self, client_id: &str) -> LoadHandle {
        if let Some(previous) = self.loader.find_marked(SDK_MARKER) {
            debug!(handle = previous.0, "removing previous payment SDK script");
            self.loader.unload(previous);
        }

        self.loader.load(ScriptTag {
            src: self.script_url(client_id),
            marker: SDK_MARKER.to_string(),
            async_load: true,
        })
    }

    /// Handle of the SDK script currently in place.
    pub fn current(&self) -> Option<LoadHandle> {
        self.loader.find_marked(SDK_MARKER)
    }

    /// Load state of `handle`, or `None` once it has been unloaded.
    pub fn state(&self, handle: LoadHandle) -> Option<LoadState> {
        self.loader.state(handle)
    }
}
