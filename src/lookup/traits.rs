//! Trait abstraction for the lookup client to enable mocking in tests

use async_trait::async_trait;

use super::error::LookupError;
use super::types::{PanResponse, PostcodeResponse};

/// Black-box request/response interface to the two lookup endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Resolve a 6-digit postcode to city/state candidates.
    async fn postcode_details(&self, postcode: &str) -> Result<PostcodeResponse, LookupError>;

    /// Verify a 10-character PAN and fetch the holder's full name.
    async fn verify_pan(&self, pan_number: &str) -> Result<PanResponse, LookupError>;
}
