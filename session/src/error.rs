//! Error types for the session capabilities.
//!
//! ERROR HANDLING
//! ==============
//! The controller never branches on an `ApiError` variant: any failure of an
//! authenticated call is a disconnect, and any failure of the login call is a
//! form error. Variants exist so logs say what actually went wrong.

/// Failure of a call to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Failure of the durable token storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The storage backend is not reachable (no window, storage disabled).
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
    #[error("token storage I/O failed: {0}")]
    Io(String),
}
