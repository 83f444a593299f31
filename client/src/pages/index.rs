//! The SecretLab page: header, secret message panel, sign-in modal, toasts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the page triggers the one-time silent session restore. Everything
//! else is driven by user events wired in the components.

use leptos::prelude::*;
use session::{AppConfig, SessionState};

use crate::components::header::AppHeader;
use crate::components::message_panel::MessagePanelBox;
use crate::components::sign_in_modal::SignInModal;
use crate::components::toast_stack::ToastStack;
use crate::state::session::spawn_with_controller;

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let app_name = AppConfig::from_build_env().app_name;

    spawn_with_controller(session, |ctl| async move {
        ctl.restore_session().await;
    });

    view! {
        <div class="page">
            <AppHeader app_name=app_name/>
            <main class="page__body">
                <MessagePanelBox/>
            </main>
            <SignInModal/>
            <ToastStack/>
        </div>
    }
}
