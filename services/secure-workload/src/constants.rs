use http::header::HeaderName;

// Headers used by the Secure Workload API.
pub const X_TETRATION_CKSUM: HeaderName = HeaderName::from_static("x-tetration-cksum");
pub const TIMESTAMP: HeaderName = HeaderName::from_static("timestamp");
pub const ID: HeaderName = HeaderName::from_static("id");

pub const USER_AGENT_VALUE: &str = "Cisco Tetration Rust Client";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Length in bytes every api secret must have.
pub const API_SECRET_BYTE_LENGTH: usize = 40;

// Env values used by the Secure Workload API.
pub const SECUREWORKLOAD_API_KEY: &str = "SECUREWORKLOAD_API_KEY";
pub const SECUREWORKLOAD_API_SECRET: &str = "SECUREWORKLOAD_API_SECRET";
pub const SECUREWORKLOAD_API_URL: &str = "SECUREWORKLOAD_API_URL";
pub const SECUREWORKLOAD_DISABLE_TLS_VERIFICATION: &str =
    "SECUREWORKLOAD_DISABLE_TLS_VERIFICATION";
