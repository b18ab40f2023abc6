use crate::{constants::*, Credential};
use async_trait::async_trait;
use tetsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Secure Workload credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `SECUREWORKLOAD_API_KEY`: The api key
/// - `SECUREWORKLOAD_API_SECRET`: The api secret
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var(SECUREWORKLOAD_API_KEY);
        let api_secret = ctx.env_var(SECUREWORKLOAD_API_SECRET);

        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Credential::new(key, &secret).map(Some),
            _ => Ok(None),
        }
    }
}
