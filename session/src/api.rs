//! Backend API contract.
//!
//! The three calls are fixed: `POST login` is anonymous, `GET profile` and
//! `GET message` carry the bearer token. Implementations live in the front-end
//! crates (`gloo-net` in the browser, `reqwest` in the CLI).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{LoginRequest, LoginResponse, Profile, SecretMessage};

/// One of the backend endpoints, relative to the configured API host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Profile,
    Message,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Profile => "profile",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn method(self) -> &'static str {
        match self {
            Self::Login => "POST",
            Self::Profile | Self::Message => "GET",
        }
    }

    /// Whether the call carries `Authorization: Bearer <token>`.
    #[must_use]
    pub fn authenticated(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Join `api_host` and the endpoint path.
#[must_use]
pub fn endpoint_url(api_host: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", api_host.trim_end_matches('/'), endpoint.path())
}

/// Value for the `Authorization` header of an authenticated call.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Transport used by the session controller.
///
/// Futures are not required to be `Send`: the browser runs everything on one
/// thread and the controller is driven cooperatively.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Fetch the profile of the token holder.
    async fn profile(&self, token: &str) -> Result<Profile, ApiError>;

    /// Fetch the secret message visible to the token holder.
    async fn message(&self, token: &str) -> Result<SecretMessage, ApiError>;
}
