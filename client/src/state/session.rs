//! Signal-backed session state and controller construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never hold a controller. Each handler builds one on demand over
//! the shared `RwSignal<SessionState>`; the controller itself is stateless
//! apart from that signal, so this is cheap and keeps handler closures `Copy`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;
use session::{AppConfig, SessionController, SessionState, StateCell};

use crate::net::api::GlooSessionApi;
use crate::util::timer::GlooTimer;
use crate::util::token_store::LocalStorageTokenStore;

/// `StateCell` over a Leptos signal. Writes notify subscribers.
#[derive(Clone, Copy, Debug)]
pub struct SessionSignal(pub RwSignal<SessionState>);

impl StateCell for SessionSignal {
    fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        self.0.update(f);
    }
}

pub type BrowserController = SessionController<GlooSessionApi, LocalStorageTokenStore, GlooTimer, SessionSignal>;

/// Controller bound to `session` with browser transport and storage.
pub fn controller(session: RwSignal<SessionState>) -> BrowserController {
    let config = AppConfig::from_build_env();
    SessionController::new(GlooSessionApi::new(&config), LocalStorageTokenStore, GlooTimer, SessionSignal(session))
}

/// Run an async controller operation on the browser's local executor.
///
/// Outside the browser build this is a no-op.
pub fn spawn_with_controller<F, Fut>(session: RwSignal<SessionState>, task: F)
where
    F: FnOnce(BrowserController) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(task(controller(session)));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, task);
    }
}
