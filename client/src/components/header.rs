//! Top bar: title, profile, sign-in/out action and theme toggle.

use leptos::prelude::*;
use session::SessionState;
use session::view::{HeaderAction, ProfilePanel, header_action, profile_panel};

use crate::state::session::{controller, spawn_with_controller};
use crate::state::ui::{UiState, theme_icon};
use crate::util::dark_mode;

#[component]
pub fn AppHeader(app_name: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_action = move |_| match session.with_untracked(header_action) {
        HeaderAction::SignIn => controller(session).open_sign_in(),
        HeaderAction::SignOut => spawn_with_controller(session, |ctl| async move {
            ctl.sign_out().await;
        }),
    };
    let on_toggle_theme = move |_| ui.update(|u| u.theme = dark_mode::toggle(u.theme));

    view! {
        <header class="header">
            <h1 class="header__title">
                <span class="header__arrow">"➜"</span>
                " "
                {app_name}
            </h1>
            <div class="header__spacer"></div>
            <div class="header__profile">
                <ProfileBlock/>
            </div>
            <button class="btn btn--primary" on:click=on_action>
                {move || session.with(header_action).label()}
            </button>
            <button class="btn btn--icon" aria-label="color mode" on:click=on_toggle_theme>
                {move || theme_icon(ui.with(|u| u.theme))}
            </button>
        </header>
    }
}

#[component]
fn ProfileBlock() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match session.with(profile_panel) {
        ProfilePanel::Loading => view! { <span class="spinner" aria-busy="true"></span> }.into_any(),
        ProfilePanel::Name(name) => view! { <span class="profile-name">{name}</span> }.into_any(),
        ProfilePanel::Empty => view! { <span></span> }.into_any(),
    }
}
