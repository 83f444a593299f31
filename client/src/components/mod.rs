//! UI components rendered by the page.
//!
//! Components read `SessionState` and `UiState` from context and map the
//! derived panels from `session::view` to markup. They hold no session logic.

pub mod header;
pub mod message_panel;
pub mod sign_in_modal;
pub mod toast_stack;
