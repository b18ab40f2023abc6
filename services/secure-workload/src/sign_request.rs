//! Secure Workload API request signer
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderName, HeaderValue, Request};
use log::debug;
use tetsign_core::hash::{base64_hmac_sha256, hex_sha256, verify_base64_hmac_sha256};
use tetsign_core::time::{format_iso8601_numeric_offset, now, parse_iso8601_numeric_offset, DateTime};
use tetsign_core::{Body, Context, Error, Result, SignRequest};

use crate::constants::*;
use crate::credential::{ApiSecret, Credential};

/// RequestSigner that implements the Secure Workload API authentication.
///
/// Every request gets the following headers:
///
/// - `X-Tetration-Cksum`: sha256 of the body, only if the request has one
/// - `User-Agent`
/// - `Id`: the api key
/// - `Timestamp`: signing time
/// - `Authorization`: base64 encoded HMAC-SHA256 of the string to sign
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request in place.
    ///
    /// A body reader is buffered once and left in the request as bytes, so
    /// the sender still gets the exact same content. Signing a request again
    /// overwrites every header set here.
    ///
    /// Headers are only touched once signing can no longer fail.
    pub fn sign(&self, req: &mut Request<Body>, cred: &Credential) -> Result<()> {
        let checksum = req
            .body_mut()
            .buffer()
            .map_err(|e| Error::body_read_failed("failed to read request body").with_source(e))?
            .map(|content| HeaderValue::from_str(&calculate_body_checksum(content)))
            .transpose()?;
        let id: HeaderValue = cred.api_key.parse()?;
        let timestamp: HeaderValue =
            format_iso8601_numeric_offset(self.time.unwrap_or_else(now)).parse()?;

        let mut ctx = SignatureContext::from_request(req);
        ctx.checksum = checksum
            .as_ref()
            .map(|v| v.as_bytes().to_vec())
            .unwrap_or_default();
        ctx.timestamp = timestamp.as_bytes().to_vec();

        let mut authorization: HeaderValue = ctx.signature(&cred.api_secret).parse()?;
        authorization.set_sensitive(true);

        let headers = req.headers_mut();
        match checksum {
            Some(checksum) => {
                headers.insert(X_TETRATION_CKSUM, checksum);
            }
            None => {
                headers.remove(X_TETRATION_CKSUM);
            }
        }
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ID, id);
        headers.insert(TIMESTAMP, timestamp);
        headers.insert(AUTHORIZATION, authorization);

        Ok(())
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Request<Body>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("missing credential"));
        };

        self.sign(req, cred)
    }
}

/// Lowercase hex encoded sha256 of the request body.
pub fn calculate_body_checksum(body: &[u8]) -> String {
    hex_sha256(body)
}

/// Everything that goes into a request signature.
///
/// The signature is a function of these five values and the api secret only.
/// Header values are kept as raw bytes, they don't have to be visible ASCII.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureContext {
    /// HTTP method, as sent.
    pub method: String,
    /// Path and query, as sent.
    pub uri: String,
    /// Value of the `X-Tetration-Cksum` header, empty if unset.
    pub checksum: Vec<u8>,
    /// Value of the `Content-Type` header, empty if unset.
    pub content_type: Vec<u8>,
    /// Value of the `Timestamp` header, empty if unset.
    pub timestamp: Vec<u8>,
}

impl SignatureContext {
    /// Collect the signed values from a request.
    ///
    /// The body is not read, the checksum comes from the header.
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let mut uri = req.uri().path().to_string();
        if let Some(query) = req.uri().query() {
            uri.push('?');
            uri.push_str(query);
        }

        Self {
            method: req.method().as_str().to_string(),
            uri,
            checksum: header_get_or_default(req, &X_TETRATION_CKSUM).to_vec(),
            content_type: header_get_or_default(req, &CONTENT_TYPE).to_vec(),
            timestamp: header_get_or_default(req, &TIMESTAMP).to_vec(),
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// Method + "\n" +
    /// Path and query + "\n" +
    /// X-Tetration-Cksum + "\n" +
    /// Content-Type + "\n" +
    /// Timestamp + "\n"
    /// ```
    pub fn string_to_sign(&self) -> Vec<u8> {
        let parts: [&[u8]; 5] = [
            self.method.as_bytes(),
            self.uri.as_bytes(),
            &self.checksum,
            &self.content_type,
            &self.timestamp,
        ];

        let mut s = Vec::with_capacity(parts.iter().map(|v| v.len() + 1).sum());
        for v in parts {
            s.extend_from_slice(v);
            s.push(b'\n');
        }

        debug!("string to sign: {:?}", String::from_utf8_lossy(&s));
        s
    }

    /// Base64 encoded HMAC-SHA256 of the string to sign.
    pub fn signature(&self, secret: &ApiSecret) -> String {
        base64_hmac_sha256(secret.as_bytes(), &self.string_to_sign())
    }

    /// Check a base64 signature against this context in constant time.
    pub fn verify(&self, secret: &ApiSecret, signature: &str) -> bool {
        verify_base64_hmac_sha256(secret.as_bytes(), &self.string_to_sign(), signature)
    }
}

/// Verify a signed request the way the API does.
///
/// Checks that the `Timestamp` header is well formed, that the body matches
/// `X-Tetration-Cksum` and that `Authorization` carries the signature of the
/// request. A body reader gets buffered, the content stays in the request.
pub fn verify_request(req: &mut Request<Body>, secret: &ApiSecret) -> Result<()> {
    let signature = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::request_invalid("missing authorization header"))?
        .to_str()?
        .to_string();
    let timestamp = match req.headers().get(TIMESTAMP) {
        Some(v) => v.to_str()?,
        None => "",
    };
    parse_iso8601_numeric_offset(timestamp)?;

    let checksum = req
        .body_mut()
        .buffer()
        .map_err(|e| Error::body_read_failed("failed to read request body").with_source(e))?
        .map(|content| calculate_body_checksum(content));
    let ctx = SignatureContext::from_request(req);
    match checksum {
        Some(checksum) if checksum.as_bytes() != ctx.checksum.as_slice() => {
            return Err(Error::signature_mismatch(format!(
                "body checksum {checksum} doesn't match header {:?}",
                String::from_utf8_lossy(&ctx.checksum)
            )));
        }
        None if !ctx.checksum.is_empty() => {
            return Err(Error::signature_mismatch(
                "checksum header present on a request without body",
            ));
        }
        _ => {}
    }

    if !ctx.verify(secret, &signature) {
        return Err(Error::signature_mismatch("signature doesn't match request"));
    }

    Ok(())
}

/// Get header value by name.
///
/// Returns empty bytes if header not found.
fn header_get_or_default<'a, B>(req: &'a Request<B>, key: &HeaderName) -> &'a [u8] {
    match req.headers().get(key) {
        Some(v) => v.as_bytes(),
        None => b"",
    }
}
