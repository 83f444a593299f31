//! Transient notices in the corner of the page.
//!
//! Each notice is dismissed after its own duration. Scheduling is keyed on
//! notice ids, so a notice is only ever scheduled once however often the
//! session signal changes.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use std::time::Duration;

use leptos::prelude::*;
use session::{AppConfig, Notice, SessionState, Severity};

#[cfg(feature = "csr")]
use crate::state::session::controller;

pub fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast toast--info",
        Severity::Warning => "toast toast--warning",
    }
}

/// Notices newer than `scheduled`, with their lifetimes.
pub fn unscheduled(notices: &[Notice], scheduled: u64) -> Vec<(u64, Duration)> {
    notices.iter().filter(|n| n.id > scheduled).map(|n| (n.id, n.duration())).collect()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let scheduled = RwSignal::new(0_u64);

    Effect::new(move || {
        let fresh = session.with(|s| unscheduled(&s.notices, scheduled.get_untracked()));
        if let Some(max) = fresh.iter().map(|(id, _)| *id).max() {
            scheduled.set(max);
        }
        for (id, duration) in fresh {
            schedule_dismiss(session, id, duration);
        }
    });

    view! {
        <div class="toasts" aria-live="polite">
            {move || {
                let app_name = AppConfig::from_build_env().app_name;
                session
                    .with(|s| s.notices.clone())
                    .into_iter()
                    .map(|notice| {
                        view! {
                            <div class={toast_class(notice.kind.severity())}>
                                <strong class="toast__title">{notice.kind.title()}</strong>
                                <p class="toast__body">{notice.kind.description(&app_name)}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn schedule_dismiss(session: RwSignal<SessionState>, id: u64, duration: Duration) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            controller(session).dismiss_notice(id);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, id, duration);
    }
}
