//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen. The page owns start-up orchestration and
//! delegates rendering details to `components`.

pub mod index;
