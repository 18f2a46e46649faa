use super::{upstream::UpstreamError, Error};

/// Strategy for handling errors raised during a JETNET request
pub enum ErrorRetryStrategy {
    /// Re-login to replace the token pair, then retry the request once
    ReloginAndRetry,
    /// Failed permanently, surface to the caller
    Surface,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // JETNET invalidated the token pair mid-session. A fresh login fixes
            // this; the retry is bounded to a single attempt per logical call.
            Error::UpstreamError(UpstreamError::InvalidToken { .. }) => {
                ErrorRetryStrategy::ReloginAndRetry
            }

            // Non-token API failures - the request itself is the problem
            Error::UpstreamError(UpstreamError::Api { .. }) => ErrorRetryStrategy::Surface,

            // Transport-level failures (non-2xx, timeouts, connection errors) are
            // distinct from an application-level token signal and never retried
            Error::UpstreamError(UpstreamError::Http { .. }) => ErrorRetryStrategy::Surface,
            Error::UpstreamError(UpstreamError::Transport(_)) => ErrorRetryStrategy::Surface,

            // Malformed bodies - retrying returns the same malformed body
            Error::UpstreamError(UpstreamError::DataShape(_)) => ErrorRetryStrategy::Surface,

            // Auth errors - permanent failures (bad credentials, missing session)
            Error::AuthError(_) => ErrorRetryStrategy::Surface,

            // Configuration errors - permanent failures, won't resolve with retry
            Error::ConfigError(_) => ErrorRetryStrategy::Surface,

            // Lookup misses and internal bugs are permanent
            Error::AircraftNotFound(_) => ErrorRetryStrategy::Surface,
            Error::InternalError(_) => ErrorRetryStrategy::Surface,
        }
    }
}
