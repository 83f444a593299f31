//! Application configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_APP_NAME: &str = "SecretLab";
pub const DEFAULT_API_HOST: &str = "http://localhost:8000/v1/";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// How long loading flags stay raised after a sign-out.
pub const SIGN_OUT_SETTLE: Duration = Duration::from_millis(500);

/// How long a transient notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Display title.
    pub app_name: String,
    /// API base URL, always ending with a single `/`.
    pub api_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `APP_NAME`: default `SecretLab`
    /// - `API_HOST`: default `http://localhost:8000/v1/`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from variables captured when the crate was compiled.
    ///
    /// The browser build has no process environment, so `APP_NAME` and
    /// `API_HOST` are baked in by the bundler.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "APP_NAME" => option_env!("APP_NAME").map(str::to_owned),
            "API_HOST" => option_env!("API_HOST").map(str::to_owned),
            _ => None,
        })
    }

    /// Resolve config through an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let app_name = read("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());
        let api_host = normalize_api_host(&read("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned()));

        Self { app_name, api_host }
    }
}

fn normalize_api_host(raw: &str) -> String {
    format!("{}/", raw.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
