//! Lookup transport errors

use thiserror::Error;

/// Failure talking to a lookup endpoint.
///
/// These never surface to the user; they are logged and the dependent
/// fields stay unresolved.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent or came back with an HTTP error status.
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded.
    #[error("decoding {endpoint} response failed: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
