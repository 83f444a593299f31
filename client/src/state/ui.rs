//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of session state so a sign-out or a
//! disconnect never touches the user's theme.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use session::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

/// Glyph for the theme toggle button.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    }
}
