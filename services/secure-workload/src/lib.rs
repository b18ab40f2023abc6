//! Secure Workload (formerly Tetration) API signer
//!
//! Requests are signed with HMAC-SHA256 over the method, path and query,
//! body checksum, content type and timestamp, keyed by the api secret.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use http::Method;
//! use tetsign_core::{Context, OsEnv, Result, Signer};
//! use tetsign_secure_workload::{
//!     build_json_request, Config, ConfigCredentialProvider, DefaultCredentialProvider,
//!     RequestSigner,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let config = Config::new().from_env(&ctx);
//!     config.validate()?;
//!
//!     // Explicit config first, then the environment.
//!     let loader = DefaultCredentialProvider::new()
//!         .push_front(ConfigCredentialProvider::new(Arc::new(config.clone())));
//!     let signer = Signer::new(ctx, loader, RequestSigner::new());
//!
//!     let mut req = build_json_request(
//!         Method::GET,
//!         &config.endpoint("/openapi/v1/app_scopes")?,
//!         None::<&()>,
//!     )?;
//!     signer.sign(&mut req).await?;
//!     Ok(())
//! }
//! ```

mod config;
pub use config::Config;

mod credential;
pub use credential::ApiSecret;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::calculate_body_checksum;
pub use sign_request::verify_request;
pub use sign_request::RequestSigner;
pub use sign_request::SignatureContext;

mod build;
pub use build::build_json_request;

mod constants;
pub use constants::{
    API_SECRET_BYTE_LENGTH, SECUREWORKLOAD_API_KEY, SECUREWORKLOAD_API_SECRET,
    SECUREWORKLOAD_API_URL, SECUREWORKLOAD_DISABLE_TLS_VERIFICATION,
};
