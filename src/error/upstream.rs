use thiserror::Error;

/// Errors raised while talking to the JETNET API.
///
/// JETNET reports most failures inside a 200 response, either as a `responsestatus`
/// field whose value starts with `ERROR` or `INVALID`, or as an RFC 7807 style
/// `{title, status, detail}` body. Those become `InvalidToken` or `Api` here.
/// Non-2xx transport statuses become `Http` and are never retried.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// JETNET declared the security token invalid; a re-login is worth one retry.
    #[error("JETNET rejected the security token: {status:?}")]
    InvalidToken { status: String },
    /// JETNET declared a non-token failure inside a 200 response.
    #[error("JETNET reported an error: {status:?}")]
    Api { status: String },
    /// Non-2xx HTTP status from JETNET.
    #[error("JETNET returned HTTP {status} for {endpoint}")]
    Http { status: u16, endpoint: String },
    /// Connection, timeout, or other reqwest-level failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// Response body could not be decoded into the expected shape.
    #[error("Unexpected JETNET response shape: {0}")]
    DataShape(String),
}
