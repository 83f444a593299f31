//! REST calls to the SecretLab backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a transport error
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are folded into `ApiError` and never panic; the controller decides
//! what a failure means for the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use session::api::{Endpoint, SessionApi, endpoint_url};
use session::types::{LoginRequest, LoginResponse, Profile, SecretMessage};
use session::{ApiError, AppConfig};

#[cfg(feature = "csr")]
use session::api::bearer;

/// `SessionApi` over the browser fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlooSessionApi {
    api_host: String,
}

impl GlooSessionApi {
    pub fn new(config: &AppConfig) -> Self {
        Self { api_host: config.api_host.clone() }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.api_host, endpoint)
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_authenticated<T: serde::de::DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    decode(resp).await
}

#[async_trait(?Send)]
impl SessionApi for GlooSessionApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url(Endpoint::Login);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(unavailable())
        }
    }

    async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        let url = self.url(Endpoint::Profile);
        #[cfg(feature = "csr")]
        {
            get_authenticated(&url, token).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token);
            Err(unavailable())
        }
    }

    async fn message(&self, token: &str) -> Result<SecretMessage, ApiError> {
        let url = self.url(Endpoint::Message);
        #[cfg(feature = "csr")]
        {
            get_authenticated(&url, token).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, token);
            Err(unavailable())
        }
    }
}
