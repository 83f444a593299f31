//! Sign-in modal with username/password fields.

#[cfg(test)]
#[path = "sign_in_modal_test.rs"]
mod sign_in_modal_test;

use leptos::prelude::*;
use session::SessionState;

use crate::state::session::{controller, spawn_with_controller};

/// Whether a key press in either field submits the form.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Credentials to submit, or `None` while a sign-in is running or a field is empty.
pub fn submission(state: &SessionState) -> Option<(String, String)> {
    if state.loading.sign_up || !state.form.can_submit() {
        return None;
    }
    Some((state.form.username.clone(), state.form.password.clone()))
}

#[component]
pub fn SignInModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let submit = move || {
        let Some((username, password)) = session.with_untracked(submission) else {
            return;
        };
        spawn_with_controller(session, move |ctl| async move {
            ctl.sign_in(&username, &password).await;
        });
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            submit();
        }
    };
    let close = move || controller(session).close_sign_in();
    let busy = move || session.with(|s| s.loading.sign_up);

    view! {
        <Show when=move || session.with(|s| s.form.open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Authentication"</h2>
                        <button class="btn btn--icon" aria-label="close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="input"
                            placeholder="Username"
                            required=true
                            autofocus=true
                            prop:value=move || session.with(|s| s.form.username.clone())
                            prop:readOnly=busy
                            on:input=move |ev| controller(session).set_username(&event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                    </label>
                    <label class="dialog__label">
                        "Password"
                        <input
                            class="input"
                            type="password"
                            placeholder="Password"
                            required=true
                            prop:value=move || session.with(|s| s.form.password.clone())
                            prop:readOnly=busy
                            on:input=move |ev| controller(session).set_password(&event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                    </label>
                    <div class="dialog__actions">
                        <p class="form-error">{move || session.with(|s| s.form.error.clone())}</p>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || session.with(|s| submission(s).is_none())
                            on:click=move |_| submit()
                        >
                            {move || if busy() { "Signing in…" } else { "Sign in" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
