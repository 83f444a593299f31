//! `SessionApi` over `reqwest`.

#[cfg(test)]
#[path = "api_test.rs"]
pub(crate) mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use session::api::{Endpoint, SessionApi, bearer, endpoint_url};
use session::types::{LoginRequest, LoginResponse, Profile, SecretMessage};
use session::{ApiError, AppConfig};

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ReqwestSessionApi {
    client: reqwest::Client,
    api_host: String,
}

impl ReqwestSessionApi {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
        Ok(Self { client, api_host: config.api_host.clone() })
    }

    fn url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.api_host, endpoint)
    }

    fn authenticated_get(&self, endpoint: Endpoint, token: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(endpoint)).header(AUTHORIZATION, bearer(token))
    }
}

async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl SessionApi for ReqwestSessionApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        tracing::debug!(username = %request.username, "POST login");
        send(self.client.post(self.url(Endpoint::Login)).json(request)).await
    }

    async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        tracing::debug!("GET profile");
        send(self.authenticated_get(Endpoint::Profile, token)).await
    }

    async fn message(&self, token: &str) -> Result<SecretMessage, ApiError> {
        tracing::debug!("GET message");
        send(self.authenticated_get(Endpoint::Message, token)).await
    }
}
