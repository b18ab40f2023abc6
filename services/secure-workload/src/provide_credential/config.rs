use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use tetsign_core::{Context, ProvideCredential, Result};

/// ConfigCredentialProvider loads credential from [`Config`].
///
/// Provides nothing unless both `api_key` and `api_secret` are set. The
/// secret length is checked like every other source.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let (Some(api_key), Some(api_secret)) = (&self.config.api_key, &self.config.api_secret)
        else {
            return Ok(None);
        };

        Credential::new(api_key.clone(), api_secret).map(Some)
    }
}
