//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use session::{AppConfig, SessionState};

use crate::pages::index::IndexPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the session and UI contexts. They are separate signals: the
/// theme must never be derived from, or reset with, the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let theme = dark_mode::read_preference();
    dark_mode::apply(theme);

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState { theme });

    provide_context(session);
    provide_context(ui);

    view! {
        <Title text={config.app_name.clone()}/>
        <IndexPage/>
    }
}
