//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern behind a plain Rust API that
//! no-ops (or reports unavailability) in native builds, so pages and tests
//! never touch `web-sys` directly.

pub mod dark_mode;
pub mod timer;
pub mod token_store;
