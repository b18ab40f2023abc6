//! Core components for signing Secure Workload API requests.
//!
//! This crate provides the foundational types and traits for the tetsign ecosystem.
//! It defines the abstractions that keep credential loading and request signing apart.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment implementation used by credential loaders
//! - **Body**: The request body as an explicit tagged value (no body, buffered bytes or a reader)
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The main orchestrator that coordinates credential loading and request signing
//!
//! ## Example
//!
//! ```no_run
//! use tetsign_core::{Body, Context, Signer, ProvideCredential, SignRequest, SigningCredential};
//! use tetsign_core::Result;
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-api-key".to_string(),
//!             secret: "my-api-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MyRequestSigner;
//!
//! #[async_trait]
//! impl SignRequest for MyRequestSigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut http::Request<Body>,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = cred.ok_or_else(|| tetsign_core::Error::credential_invalid("missing credential"))?;
//!         req.headers_mut().insert("id", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new();
//! let signer = Signer::new(ctx, MyLoader, MyRequestSigner);
//!
//! let mut req = http::Request::get("https://example.com/openapi/v1/app_scopes")
//!     .body(Body::Empty)?;
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod body;
pub use body::Body;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
