//! Client-side authentication session core for SecretLab.
//!
//! This crate owns the session lifecycle shared by the browser `client` and
//! the terminal `cli`: token acquisition, silent restore on start-up, expiry
//! handling, and the UI-visible state derived from those outcomes.
//!
//! ARCHITECTURE
//! ============
//! The controller never touches a concrete global. Transport (`SessionApi`),
//! token persistence (`TokenStore`), delays (`Timer`) and the state location
//! (`StateCell`) are injected, so each front end supplies its own platform
//! glue and tests supply fakes.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;
pub mod timer;
pub mod types;
pub mod view;

pub use api::{Endpoint, SessionApi};
pub use config::AppConfig;
pub use controller::SessionController;
pub use error::{ApiError, StoreError};
pub use state::{FormState, LoadingFlags, Notice, NoticeKind, Phase, SessionState, Severity, StateCell};
pub use store::{MemoryTokenStore, TokenStore};
pub use timer::Timer;
pub use view::Theme;
