//! Routed pages and the session context they share.

mod assessment;
mod home;
mod results;

pub use assessment::Assessment;
pub use home::Home;
pub use results::Results;

use dioxus::prelude::*;

use crate::core::config::Settings;
use crate::core::session::{SessionId, SessionState, SessionStore};

/// Copyable handle to the current window's session inside the shared store.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    store: Signal<SessionStore>,
    id: SessionId,
}

impl SessionHandle {
    /// Read the session; `None` only after it was closed.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        self.store.read().get(self.id).map(f)
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        let mut store = self.store;
        let mut guard = store.write();
        guard.get_mut(self.id).map(f)
    }
}

/// Load settings and open a session for this app instance. Call once from the root.
pub fn provide_app_state() -> SessionHandle {
    let settings = use_context_provider(|| Signal::new(Settings::load()));
    let store = use_context_provider(|| Signal::new(SessionStore::new()));
    let handle = use_hook(move || {
        let edition = settings.peek().edition;
        let mut store = store;
        let id = store.write().open(edition);
        tracing::info!(session = %id, ?edition, "session started");
        SessionHandle { store, id }
    });
    use_context_provider(move || handle)
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

pub fn use_settings() -> Signal<Settings> {
    use_context::<Signal<Settings>>()
}
