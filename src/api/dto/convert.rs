//! DTOs for the conversion endpoints.
//!
//! Field names follow the public contract: `weburl` and `deeplink`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest link accepted in a request body.
pub const MAX_LINK_LENGTH: usize = 2048;

/// Request to convert a web URL into a deeplink.
///
/// A missing `weburl` is treated as empty and rejected by the translator.
#[derive(Debug, Deserialize, Validate)]
pub struct DeepLinkRequest {
    #[serde(rename = "weburl", default)]
    #[validate(length(max = 2048))]
    pub web_url: String,
}

#[derive(Debug, Serialize)]
pub struct DeepLinkResponse {
    pub deeplink: String,
}

/// Request to convert a deeplink into a web URL.
#[derive(Debug, Deserialize, Validate)]
pub struct WebUrlRequest {
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub deeplink: String,
}

#[derive(Debug, Serialize)]
pub struct WebUrlResponse {
    #[serde(rename = "weburl")]
    pub web_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_names() {
        let request: DeepLinkRequest =
            serde_json::from_str(r#"{"weburl": "https://www.trendyol.com"}"#).unwrap();
        assert_eq!(request.web_url, "https://www.trendyol.com");

        let request: WebUrlRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.deeplink, "");
    }

    #[test]
    fn test_response_field_names() {
        let json = serde_json::to_value(WebUrlResponse {
            web_url: "https://www.trendyol.com".to_string(),
        })
        .unwrap();
        assert_eq!(json["weburl"], "https://www.trendyol.com");
    }

    #[test]
    fn test_length_limit() {
        let request = WebUrlRequest {
            deeplink: "x".repeat(MAX_LINK_LENGTH + 1),
        };
        assert!(request.validate().is_err());
    }
}
