use std::fmt::{Debug, Formatter};

use crate::constants::*;
use tetsign_core::{utils::Redact, Context, Error, Result};

/// Config carries all the configuration for the Secure Workload API client.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SECUREWORKLOAD_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SECUREWORKLOAD_API_SECRET`]
    pub api_secret: Option<String>,
    /// `api_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SECUREWORKLOAD_API_URL`]
    pub api_url: Option<String>,
    /// `disable_tls_verification` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SECUREWORKLOAD_DISABLE_TLS_VERIFICATION`]
    ///
    /// Signing ignores it, it's carried for the http client sending the requests.
    pub disable_tls_verification: Option<bool>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set api_url
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Set disable_tls_verification
    pub fn with_disable_tls_verification(mut self, disable: bool) -> Self {
        self.disable_tls_verification = Some(disable);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(SECUREWORKLOAD_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SECUREWORKLOAD_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SECUREWORKLOAD_API_URL) {
            self.api_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(SECUREWORKLOAD_DISABLE_TLS_VERIFICATION) {
            self.disable_tls_verification
                .get_or_insert(matches!(v.to_lowercase().as_str(), "true" | "1"));
        }

        self
    }

    /// Check that every required field is set and non-empty.
    ///
    /// All problems are reported at once.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.api_key.as_deref().unwrap_or_default().is_empty() {
            missing.push("api key");
        }
        if self.api_secret.as_deref().unwrap_or_default().is_empty() {
            missing.push("api secret");
        }
        if self.api_url.as_deref().unwrap_or_default().is_empty() {
            missing.push("api url");
        }

        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::config_invalid(format!(
            "{} must be configured for the Secure Workload API",
            missing.join(", ")
        )))
    }

    /// Build the full url of an API path such as `/openapi/v1/app_scopes`.
    ///
    /// A trailing `/` on the configured api url is ignored.
    pub fn endpoint(&self, path: &str) -> Result<String> {
        let base = self
            .api_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("api url must be configured"))?;
        let base = base.trim_end_matches('/');

        if path.starts_with('/') {
            Ok(format!("{base}{path}"))
        } else {
            Ok(format!("{base}/{path}"))
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("disable_tls_verification", &self.disable_tls_verification)
            .finish()
    }
}
