use super::{offline_context, offline_signer, API_KEY, API_SECRET, API_URL};
use anyhow::Result;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Method;
use pretty_assertions::assert_eq;
use serde::Serialize;
use tetsign_core::{Context, ErrorKind, Signer, StaticEnv};
use tetsign_core::time::parse_iso8601_numeric_offset;
use tetsign_secure_workload::{
    build_json_request, verify_request, ApiSecret, Config, Credential, DefaultCredentialProvider,
    RequestSigner, SignatureContext, StaticCredentialProvider,
};

#[derive(Serialize)]
struct CreateScope<'a> {
    short_name: &'a str,
    parent_app_scope_id: &'a str,
}

fn endpoint(path: &str) -> Result<String> {
    Ok(Config::new().from_env(&offline_context()).endpoint(path)?)
}

#[tokio::test]
async fn test_sign_get_request() -> Result<()> {
    let signer = offline_signer();

    let mut req = build_json_request(
        Method::GET,
        &endpoint("/openapi/v1/app_scopes")?,
        None::<&()>,
    )?;
    signer.sign(&mut req).await?;

    let headers = req.headers();
    assert_eq!(headers["id"], API_KEY);
    assert_eq!(headers[USER_AGENT], "Cisco Tetration Rust Client");
    assert!(headers.get("x-tetration-cksum").is_none());
    assert!(headers.get("timestamp").is_some());
    assert!(headers.get(AUTHORIZATION).is_some());

    verify_request(&mut req, &ApiSecret::new(API_SECRET)?)?;
    Ok(())
}

#[tokio::test]
async fn test_sign_post_request() -> Result<()> {
    let signer = offline_signer();

    let payload = CreateScope {
        short_name: "Apps",
        parent_app_scope_id: "5ce71fd5497d4f2c23af85b7",
    };
    let mut req = build_json_request(
        Method::POST,
        &endpoint("/openapi/v1/app_scopes")?,
        Some(&payload),
    )?;
    signer.sign(&mut req).await?;

    let checksum = req.headers()["x-tetration-cksum"].to_str()?.to_string();
    let content = req.body().as_bytes().expect("body must be kept");
    assert_eq!(checksum, tetsign_secure_workload::calculate_body_checksum(content));
    assert!(content.ends_with(b"\n"));

    verify_request(&mut req, &ApiSecret::new(API_SECRET)?)?;
    Ok(())
}

#[tokio::test]
async fn test_sign_request_with_query() -> Result<()> {
    let signer = offline_signer();

    let mut req = build_json_request(
        Method::GET,
        &format!("{API_URL}/openapi/v1/inventory/search?limit=10&offset=abc%3D"),
        None::<&()>,
    )?;
    signer.sign(&mut req).await?;

    let ctx = SignatureContext::from_request(&req);
    assert_eq!(ctx.uri, "/openapi/v1/inventory/search?limit=10&offset=abc%3D");
    assert_eq!(
        req.headers()[AUTHORIZATION],
        ctx.signature(&ApiSecret::new(API_SECRET)?).as_str()
    );

    Ok(())
}

#[tokio::test]
async fn test_sign_twice_refreshes_timestamp_and_signature() -> Result<()> {
    let cred = Credential::new(API_KEY, API_SECRET)?;
    let first = parse_iso8601_numeric_offset("2020-04-21T18:23:37+0000")?;
    let second = parse_iso8601_numeric_offset("2020-04-21T18:24:07+0000")?;

    let mut req = build_json_request(Method::PUT, &endpoint("/openapi/v1/roles/1")?, Some("x"))?;
    RequestSigner::new().with_time(first).sign(&mut req, &cred)?;
    let first_timestamp = req.headers()["timestamp"].clone();
    let first_signature = req.headers()[AUTHORIZATION].clone();

    RequestSigner::new().with_time(second).sign(&mut req, &cred)?;
    assert_eq!(req.headers()["timestamp"], "2020-04-21T18:24:07+0000");
    assert_ne!(req.headers()["timestamp"], first_timestamp);
    assert_ne!(req.headers()[AUTHORIZATION], first_signature);

    for name in ["id", "timestamp", "authorization", "x-tetration-cksum", "user-agent"] {
        assert_eq!(req.headers().get_all(name).iter().count(), 1, "{name}");
    }
    verify_request(&mut req, &ApiSecret::new(API_SECRET)?)?;

    Ok(())
}

#[tokio::test]
async fn test_static_provider_wins_over_env() -> Result<()> {
    let other_key = "fedcba9876543210fedcba9876543210";
    let other_secret = "YYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYY";

    let signer = Signer::new(
        offline_context(),
        DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new(other_key, other_secret)),
        RequestSigner::new(),
    );

    let mut req = build_json_request(Method::GET, &endpoint("/openapi/v1/roles")?, None::<&()>)?;
    signer.sign(&mut req).await?;

    assert_eq!(req.headers()["id"], other_key);
    verify_request(&mut req, &ApiSecret::new(other_secret)?)?;
    let err = verify_request(&mut req, &ApiSecret::new(API_SECRET)?)
        .expect_err("env secret must not verify");
    assert_eq!(err.kind(), ErrorKind::SignatureMismatch);

    Ok(())
}

#[tokio::test]
async fn test_sign_without_credential() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let mut req = build_json_request(
        Method::GET,
        &format!("{API_URL}/openapi/v1/roles"),
        None::<&()>,
    )?;
    let err = signer.sign(&mut req).await.expect_err("sign must fail");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(req.headers().get(AUTHORIZATION).is_none());

    Ok(())
}

#[tokio::test]
async fn test_sign_with_invalid_secret_in_env() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("SECUREWORKLOAD_API_KEY", API_KEY),
        ("SECUREWORKLOAD_API_SECRET", "too-short"),
    ]));
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());

    let mut req = build_json_request(
        Method::GET,
        &format!("{API_URL}/openapi/v1/roles"),
        None::<&()>,
    )?;
    let err = signer.sign(&mut req).await.expect_err("sign must fail");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(
        err.message(),
        "invalid number 9 of api secret bytes, required 40"
    );

    Ok(())
}
