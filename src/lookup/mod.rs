//! Lookup client module for the two enrichment endpoints

mod client;
mod error;
mod traits;
mod types;

pub use client::HttpLookupClient;
pub use error::LookupError;
pub use traits::LookupClient;
pub use types::{PanResponse, PostcodeResponse};

#[cfg(test)]
pub use traits::MockLookupClient;
