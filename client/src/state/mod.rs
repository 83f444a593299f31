//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! `session` wraps the platform-neutral `SessionState` in a signal and builds
//! controllers over it; `ui` holds presentation-only preferences.

pub mod session;
pub mod ui;
