//! Plain-text rendering of the derived session panels.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use session::view::{self, MessagePanel, NOT_AUTHORIZED_TEXT, ProfilePanel};
use session::{Notice, SessionState, Severity, Theme};

/// Title bar: app name, profile and the action available next.
pub fn header_line(app_name: &str, state: &SessionState) -> String {
    let profile = match view::profile_panel(state) {
        ProfilePanel::Loading => " …".to_owned(),
        ProfilePanel::Name(name) => format!(" {name}"),
        ProfilePanel::Empty => String::new(),
    };
    format!("➜ {app_name} |{profile} | {}", view::header_action(state).label())
}

pub fn message_block(state: &SessionState) -> String {
    match view::message_panel(state, Theme::default()) {
        MessagePanel::Loading => "loading…".to_owned(),
        MessagePanel::Secret { message, .. } => format!("Your secret message is [{message}]"),
        MessagePanel::NotAuthorized { .. } => NOT_AUTHORIZED_TEXT.to_owned(),
    }
}

pub fn notice_line(notice: &Notice, app_name: &str) -> String {
    let prefix = match notice.kind.severity() {
        Severity::Info => "",
        Severity::Warning => "warning: ",
    };
    format!("{prefix}{}: {}", notice.kind.title(), notice.kind.description(app_name))
}
