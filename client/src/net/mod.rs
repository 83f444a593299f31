//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session crate's `SessionApi` over `gloo-net`.

pub mod api;
