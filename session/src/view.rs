//! Derived UI state.
//!
//! Pure functions of `SessionState` plus the independent display theme. The
//! three axes (loading, authentication, theme) are combined here and nowhere
//! else, so front ends only map the resulting enums to markup or text.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::state::SessionState;

pub const WELCOME_IMAGE: &str = "/assets/welcome.svg";
pub const FORBIDDEN_IMAGE_LIGHT: &str = "/assets/404.svg";
pub const FORBIDDEN_IMAGE_DARK: &str = "/assets/404b.svg";

pub const NOT_AUTHORIZED_TEXT: &str = "You don't have enough permissions to view this page.";

/// Display color scheme. Unrelated to authentication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagePanel {
    /// Skeleton placeholder while the message loads.
    Loading,
    Secret { message: String, image: &'static str },
    NotAuthorized { image: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfilePanel {
    /// Spinner while the profile loads.
    Loading,
    Name(String),
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    SignIn,
    SignOut,
}

impl HeaderAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignOut => "Sign out",
        }
    }
}

#[must_use]
pub fn message_panel(state: &SessionState, theme: Theme) -> MessagePanel {
    if state.loading.message {
        return MessagePanel::Loading;
    }
    if state.authenticated() {
        return MessagePanel::Secret { message: state.secret_message.clone(), image: WELCOME_IMAGE };
    }
    let image = match theme {
        Theme::Light => FORBIDDEN_IMAGE_LIGHT,
        Theme::Dark => FORBIDDEN_IMAGE_DARK,
    };
    MessagePanel::NotAuthorized { image }
}

#[must_use]
pub fn profile_panel(state: &SessionState) -> ProfilePanel {
    if state.loading.profile {
        ProfilePanel::Loading
    } else if state.authenticated() {
        ProfilePanel::Name(state.profile_name.clone())
    } else {
        ProfilePanel::Empty
    }
}

#[must_use]
pub fn header_action(state: &SessionState) -> HeaderAction {
    if state.authenticated() { HeaderAction::SignOut } else { HeaderAction::SignIn }
}
