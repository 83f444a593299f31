//! Secret message panel.

use leptos::prelude::*;
use session::SessionState;
use session::view::{MessagePanel, NOT_AUTHORIZED_TEXT, message_panel};

use crate::state::ui::UiState;

/// Skeleton while loading, the secret when authenticated, otherwise the
/// themed "not authorized" placeholder.
#[component]
pub fn MessagePanelBox() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let body = move || {
        let theme = ui.with(|u| u.theme);
        match session.with(|s| message_panel(s, theme)) {
            MessagePanel::Loading => view! {
                <div class="stack">
                    <div class="skeleton skeleton--image"></div>
                    <div class="skeleton skeleton--line"></div>
                </div>
            }
            .into_any(),
            MessagePanel::Secret { message, image } => view! {
                <div class="stack stack--center">
                    <img src=image width="182" alt="logo"/>
                    <p>"Your secret message is " <span class="tag">{message}</span></p>
                </div>
            }
            .into_any(),
            MessagePanel::NotAuthorized { image } => view! {
                <div class="stack stack--center">
                    <img src=image width="300" alt="404"/>
                    <p>{NOT_AUTHORIZED_TEXT}</p>
                </div>
            }
            .into_any(),
        }
    };

    view! { <section class="panel">{body}</section> }
}
