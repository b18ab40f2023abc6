use super::{init_signing_test, send_signed_request};
use anyhow::Result;
use http::{Method, StatusCode};
use log::warn;
use tetsign_secure_workload::build_json_request;

#[tokio::test]
async fn test_list_app_scopes() -> Result<()> {
    let Some((config, signer)) = init_signing_test() else {
        warn!("TETSIGN_SECURE_WORKLOAD_TEST is not set, skipped");
        return Ok(());
    };

    let req = build_json_request(
        Method::GET,
        &config.endpoint("/openapi/v1/app_scopes")?,
        None::<&()>,
    )?;

    let (status, _body) = send_signed_request(&config, &signer, req).await?;
    assert_eq!(StatusCode::OK, status);
    Ok(())
}

#[tokio::test]
async fn test_list_app_scopes_with_wrong_secret() -> Result<()> {
    let Some((config, _)) = init_signing_test() else {
        warn!("TETSIGN_SECURE_WORKLOAD_TEST is not set, skipped");
        return Ok(());
    };

    let signer = tetsign_core::Signer::new(
        tetsign_core::Context::new(),
        tetsign_secure_workload::StaticCredentialProvider::new(
            config.api_key.as_deref().unwrap_or_default(),
            "YYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYYY",
        ),
        tetsign_secure_workload::RequestSigner::new(),
    );
    let req = build_json_request(
        Method::GET,
        &config.endpoint("/openapi/v1/app_scopes")?,
        None::<&()>,
    )?;

    let (status, _body) = send_signed_request(&config, &signer, req).await?;
    assert_eq!(StatusCode::FORBIDDEN, status);
    Ok(())
}
