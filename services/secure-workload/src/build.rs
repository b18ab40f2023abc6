use http::header::CONTENT_TYPE;
use http::{Method, Request};
use serde::Serialize;
use tetsign_core::{Body, Error, Result};

use crate::constants::JSON_CONTENT_TYPE;

/// Build an unsigned JSON request for the Secure Workload API.
///
/// The payload is encoded as compact JSON followed by a single `\n`. Without
/// a payload the request carries no body at all. `Content-Type` is always
/// `application/json`.
///
/// ```
/// use http::Method;
/// use tetsign_secure_workload::build_json_request;
///
/// # fn main() -> tetsign_core::Result<()> {
/// let req = build_json_request(
///     Method::GET,
///     "https://acme.example.com/openapi/v1/app_scopes",
///     None::<&()>,
/// )?;
/// assert!(!req.body().is_present());
/// # Ok(())
/// # }
/// ```
pub fn build_json_request<T: Serialize + ?Sized>(
    method: Method,
    url: &str,
    payload: Option<&T>,
) -> Result<Request<Body>> {
    let body = match payload {
        Some(payload) => {
            let mut content = serde_json::to_vec(payload).map_err(|e| {
                Error::request_invalid("failed to encode json payload").with_source(e)
            })?;
            content.push(b'\n');
            Body::from(content)
        }
        None => Body::Empty,
    };

    let req = Request::builder()
        .method(method)
        .uri(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body)?;

    Ok(req)
}
