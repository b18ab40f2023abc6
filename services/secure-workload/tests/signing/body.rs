use super::{offline_signer, API_SECRET, API_URL};
use anyhow::Result;
use http::header::CONTENT_TYPE;
use http::{Method, Request};
use std::io::{Cursor, Read};
use tetsign_core::Body;
use tetsign_secure_workload::{calculate_body_checksum, verify_request, ApiSecret};
use test_case::test_case;

fn read_all(body: Body) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    body.into_reader().read_to_end(&mut content)?;
    Ok(content)
}

#[test_case(0; "empty")]
#[test_case(1; "single byte")]
#[test_case(4096; "one page")]
#[test_case(64 * 1024 + 17; "larger than 64KiB")]
#[tokio::test]
async fn test_bytes_body_is_kept(size: usize) -> Result<()> {
    let content: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();

    let mut req = Request::post(format!("{API_URL}/openapi/v1/upload"))
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(Body::from(content.clone()))?;
    offline_signer().sign(&mut req).await?;

    assert_eq!(
        req.headers()["x-tetration-cksum"],
        calculate_body_checksum(&content).as_str()
    );
    verify_request(&mut req, &ApiSecret::new(API_SECRET)?)?;
    assert_eq!(read_all(req.into_body())?, content);

    Ok(())
}

#[test_case(0; "empty")]
#[test_case(1; "single byte")]
#[test_case(64 * 1024 + 17; "larger than 64KiB")]
#[tokio::test]
async fn test_reader_body_is_kept(size: usize) -> Result<()> {
    let content: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();

    let mut req = Request::builder()
        .method(Method::PUT)
        .uri(format!("{API_URL}/openapi/v1/upload"))
        .body(Body::from_reader(Cursor::new(content.clone())))?;
    offline_signer().sign(&mut req).await?;

    assert_eq!(
        req.headers()["x-tetration-cksum"],
        calculate_body_checksum(&content).as_str()
    );
    assert_eq!(req.body().content_length(), Some(size as u64));
    assert_eq!(read_all(req.into_body())?, content);

    Ok(())
}

#[tokio::test]
async fn test_no_body_has_no_checksum() -> Result<()> {
    let mut req = Request::get(format!("{API_URL}/openapi/v1/roles")).body(Body::Empty)?;
    offline_signer().sign(&mut req).await?;

    assert!(req.headers().get("x-tetration-cksum").is_none());
    assert!(read_all(req.into_body())?.is_empty());

    Ok(())
}
