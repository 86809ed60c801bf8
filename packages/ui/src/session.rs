//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] restores the persisted credential once at startup and
//! puts three things in context: the session signal, the API client and the
//! edit hand-over slot used to carry a recipe from "my recipes" to the editor.

use api::{ApiClient, Recipe, ReqwestTransport};
use dioxus::prelude::*;
use store::{ClientConfig, Credential, KeyValueStorage, SessionStore};

use crate::screens::CredentialSink;

/// Durable storage for the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub type AppSession = Signal<SessionStore<PlatformStorage>>;
pub type AppApi = ApiClient<ReqwestTransport>;

fn platform_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStorage::platform_default()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
}

impl<S: KeyValueStorage + 'static> CredentialSink for Signal<SessionStore<S>> {
    fn store_credential(&mut self, credential: Credential) {
        self.write().set(credential);
    }
}

/// Get the session. Reading it subscribes the caller to login/logout.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

pub fn use_api() -> AppApi {
    use_context::<AppApi>()
}

/// Slot a screen fills before navigating to the editor.
pub fn use_edit_handoff() -> Signal<Option<Recipe>> {
    use_context::<Signal<Option<Recipe>>>()
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let storage_key = config.session.storage_key.clone();
    let session = use_signal(move || SessionStore::restore(platform_storage(), storage_key));
    let handoff = use_signal(|| Option::<Recipe>::None);

    use_context_provider(|| session);
    use_context_provider(|| ApiClient::from_config(&config));
    use_context_provider(|| handoff);

    rsx! {
        {children}
    }
}

/// Button that signs the user out by clearing the session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().clear();
        tracing::info!("signed out");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
