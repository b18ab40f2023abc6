use anyhow::Result;
use http::Method;
use serde::Serialize;
use tetsign_core::{Context, OsEnv, ProvideCredential, Signer};
use tetsign_secure_workload::{
    build_json_request, Config, DefaultCredentialProvider, RequestSigner,
    StaticCredentialProvider,
};

#[derive(Serialize)]
struct CreateScope {
    short_name: String,
    query: serde_json::Value,
    parent_app_scope_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let api_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| "https://acme.example.com".to_string());
    let config = config.with_api_url(api_url);

    let loader = DefaultCredentialProvider::new();
    let signer = if loader.provide_credential(&ctx).await?.is_none() {
        println!("No Secure Workload credentials found, using demo credentials for example");
        Signer::new(
            ctx,
            StaticCredentialProvider::new(
                "0123456789abcdef0123456789abcdef",
                "0123456789abcdef0123456789abcdef01234567",
            ),
            RequestSigner::new(),
        )
    } else {
        Signer::new(ctx, loader, RequestSigner::new())
    };

    println!("Example 1: list app scopes");
    let mut req = build_json_request(
        Method::GET,
        &config.endpoint("/openapi/v1/app_scopes")?,
        None::<&()>,
    )?;
    signer.sign(&mut req).await?;
    println!("Id header: {:?}", req.headers().get("id"));
    println!("Timestamp header: {:?}", req.headers().get("timestamp"));
    println!("Authorization header: {:?}", req.headers().get("authorization"));

    println!("\nExample 2: create app scope");
    let payload = CreateScope {
        short_name: "Apps".to_string(),
        query: serde_json::json!({"type": "eq", "field": "ip", "value": "10.0.0.1"}),
        parent_app_scope_id: "5ce71fd5497d4f2c23af85b7".to_string(),
    };
    let mut req = build_json_request(
        Method::POST,
        &config.endpoint("/openapi/v1/app_scopes")?,
        Some(&payload),
    )?;
    signer.sign(&mut req).await?;
    println!(
        "X-Tetration-Cksum header: {:?}",
        req.headers().get("x-tetration-cksum")
    );
    println!("Authorization header: {:?}", req.headers().get("authorization"));

    println!("\nDemo mode: requests are signed but not sent");
    Ok(())
}
