use crate::Credential;
use async_trait::async_trait;
use tetsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides the api key and api secret it was built with.
///
/// The secret length is checked when the credential is provided, so a bad
/// secret surfaces on first use.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    api_key: String,
    api_secret: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with api key and api secret.
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("api_key", &tetsign_core::utils::Redact::from(&self.api_key))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Credential::new(self.api_key.clone(), &self.api_secret).map(Some)
    }
}
