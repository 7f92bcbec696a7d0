//! Wire types for the two lookup endpoints

use serde::{Deserialize, Serialize};

/// Business status string both endpoints use for success.
const STATUS_SUCCESS: &str = "Success";

/// Request body for the postcode lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PostcodeLookupRequest {
    pub postcode: String,
}

/// A city or state entry in the postcode response.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedPlace {
    pub name: String,
}

/// Response body of the postcode lookup.
///
/// Unknown fields are ignored; missing arrays decode as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub city: Vec<NamedPlace>,
    #[serde(default)]
    pub state: Vec<NamedPlace>,
}

impl PostcodeResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// First resolved city name, or empty when the endpoint returned none.
    pub fn first_city(&self) -> &str {
        self.city.first().map(|p| p.name.as_str()).unwrap_or("")
    }

    /// First resolved state name, or empty when the endpoint returned none.
    pub fn first_state(&self) -> &str {
        self.state.first().map(|p| p.name.as_str()).unwrap_or("")
    }
}

/// Request body for the PAN verification.
#[derive(Debug, Clone, Serialize)]
pub struct PanLookupRequest {
    #[serde(rename = "panNumber")]
    pub pan_number: String,
}

/// Response body of the PAN verification.
#[derive(Debug, Clone, Deserialize)]
pub struct PanResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "isValid")]
    pub is_valid: bool,
    #[serde(default, rename = "fullName")]
    pub full_name: String,
}

impl PanResponse {
    /// The identity resolved: success status with the valid flag set.
    pub fn is_verified(&self) -> bool {
        self.status == STATUS_SUCCESS && self.is_valid
    }

    /// Split the returned full name on the first whitespace into
    /// (first name, last name). Either side may be empty.
    pub fn split_name(&self) -> (String, String) {
        match self.full_name.split_once(char::is_whitespace) {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => (self.full_name.clone(), String::new()),
        }
    }
}
