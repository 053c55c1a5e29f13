//! Error taxonomy for the sync pipeline.
//!
//! The orchestrator decides what is fatal: a `Transport`/`Api`/`Malformed`
//! error on the initial batch read aborts the invocation, while the same
//! error during a per-record lookup or write is converted into a skip.
//! `DataUnavailable` is always a per-record outcome.

/// Maximum error-body excerpt carried in an [`SyncError::Api`] message.
const BODY_EXCERPT_LEN: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Network-level failure before a response was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("{service} API error {status}: {body}")]
    Api {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response decoded into something other than the expected shape.
    /// Propagates exactly like a transport failure.
    #[error("malformed response from {service}: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },

    /// The enrichment source had nothing usable for the site.
    #[error("no usable site profile data")]
    DataUnavailable,
}

impl SyncError {
    /// Build an [`SyncError::Api`] with the response body truncated to a
    /// loggable excerpt.
    pub fn api(service: &'static str, status: reqwest::StatusCode, body: String) -> Self {
        Self::Api {
            service,
            status,
            body: body.chars().take(BODY_EXCERPT_LEN).collect(),
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
