//! HTTP client for the lookup endpoints
//!
//! Both endpoints are plain POST-JSON calls. HTTP-level failures and body
//! decoding failures are typed; the business `status` field inside a 2xx
//! body is the caller's concern.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::error::LookupError;
use super::traits::LookupClient;
use super::types::{PanLookupRequest, PanResponse, PostcodeLookupRequest, PostcodeResponse};
use crate::config::FormConfig;

const POSTCODE_ENDPOINT: &str = "POST get-postcode-details";
const PAN_ENDPOINT: &str = "POST verify-pan";

/// Production lookup client backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    http: reqwest::Client,
    postcode_url: String,
    pan_url: String,
}

impl HttpLookupClient {
    /// Build a client from configuration.
    pub fn new(config: &FormConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs()))
            .build()?;

        Ok(Self {
            http,
            postcode_url: config.postcode_url(),
            pan_url: config.pan_url(),
        })
    }

    async fn post_json<Req, Resp>(
        &self,
        endpoint: &'static str,
        url: &str,
        req: &Req,
    ) -> Result<Resp, LookupError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .post(url)
            .json(req)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::Http {
                endpoint,
                source: e,
            })?;

        resp.json().await.map_err(|e| LookupError::Decode {
            endpoint,
            source: e,
        })
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn postcode_details(&self, postcode: &str) -> Result<PostcodeResponse, LookupError> {
        tracing::debug!(postcode, "dispatching postcode lookup");
        let req = PostcodeLookupRequest {
            postcode: postcode.to_string(),
        };
        self.post_json(POSTCODE_ENDPOINT, &self.postcode_url, &req)
            .await
    }

    async fn verify_pan(&self, pan_number: &str) -> Result<PanResponse, LookupError> {
        tracing::debug!(pan = pan_number, "dispatching PAN verification");
        let req = PanLookupRequest {
            pan_number: pan_number.to_string(),
        };
        self.post_json(PAN_ENDPOINT, &self.pan_url, &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> HttpLookupClient {
        let config = FormConfig {
            postcode_url: Some(format!("{}/api/get-postcode-details.php", server.uri())),
            pan_url: Some(format!("{}/api/verify-pan.php", server.uri())),
            http_timeout_secs: Some(5),
        };
        HttpLookupClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_postcode_lookup_posts_expected_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get-postcode-details.php"))
            .and(body_json(serde_json::json!({"postcode": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "Success",
                "city": [{"name": "Pune"}],
                "state": [{"name": "Maharashtra"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = test_client(&server)
            .postcode_details("123456")
            .await
            .unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.first_city(), "Pune");
        assert_eq!(resp.first_state(), "Maharashtra");
    }

    #[tokio::test]
    async fn test_pan_lookup_posts_expected_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/verify-pan.php"))
            .and(body_json(serde_json::json!({"panNumber": "ABCDE1234F"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "Success",
                "isValid": true,
                "fullName": "John Doe"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = test_client(&server).verify_pan("ABCDE1234F").await.unwrap();
        assert!(resp.is_verified());
        assert_eq!(resp.split_name(), ("John".to_string(), "Doe".to_string()));
    }

    #[tokio::test]
    async fn test_non_success_business_status_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get-postcode-details.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": "Error"})),
            )
            .mount(&server)
            .await;

        let resp = test_client(&server)
            .postcode_details("999999")
            .await
            .unwrap();
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn test_http_error_status_maps_to_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/verify-pan.php"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .verify_pan("ABCDE1234F")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Http { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/get-postcode-details.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .postcode_details("123456")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Decode { .. }));
    }
}
