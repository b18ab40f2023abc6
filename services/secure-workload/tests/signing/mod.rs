mod body;
mod live;
mod standard;

use anyhow::Result;
use http::{Request, StatusCode};
use log::debug;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use tetsign_core::{Body, Context, Signer, StaticEnv};
use tetsign_secure_workload::{
    Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider, RequestSigner,
    SECUREWORKLOAD_API_KEY, SECUREWORKLOAD_API_SECRET, SECUREWORKLOAD_API_URL,
};

pub const API_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const API_SECRET: &str = "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";
pub const API_URL: &str = "https://acme.example.com";

/// Context with a fake Secure Workload environment.
pub fn offline_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv::from_pairs([
        (SECUREWORKLOAD_API_KEY, API_KEY),
        (SECUREWORKLOAD_API_SECRET, API_SECRET),
        (SECUREWORKLOAD_API_URL, API_URL),
    ]))
}

/// Signer loading its credential from the fake environment.
pub fn offline_signer() -> Signer<Credential> {
    Signer::new(
        offline_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
}

/// Initialize the live test environment
pub fn init_signing_test() -> Option<(Config, Signer<Credential>)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("TETSIGN_SECURE_WORKLOAD_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new().with_env(tetsign_core::OsEnv);
    let config = Config::new().from_env(&ctx);
    config
        .validate()
        .expect("SECUREWORKLOAD_* env must be set for live tests");

    let signer = Signer::new(
        ctx,
        ConfigCredentialProvider::new(Arc::new(config.clone())),
        RequestSigner::new(),
    );
    Some((config, signer))
}

/// Sign the request, send it and return the response.
pub async fn send_signed_request(
    config: &Config,
    signer: &Signer<Credential>,
    mut req: Request<Body>,
) -> Result<(StatusCode, String)> {
    signer.sign(&mut req).await?;
    debug!("signed request: {req:?}");

    let (parts, body) = req.into_parts();
    let body = body.as_bytes().cloned().unwrap_or_default();
    let req = Request::from_parts(parts, body);

    let client = Client::builder()
        .danger_accept_invalid_certs(config.disable_tls_verification.unwrap_or_default())
        .build()?;
    let resp = client.execute(req.try_into()?).await?;

    let status = resp.status();
    let body = resp.text().await?;

    debug!("response status: {status}, body: {body}");
    Ok((status, body))
}
