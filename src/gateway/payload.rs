use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};

use crate::constants::LOG_PREVIEW_CHARS;
use crate::gateway::error::GatewayError;

/// Body of `POST /predict_similarity`. Missing fields default to `""`;
/// `null` or non-string values fail to parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text1: String,
    #[serde(default)]
    pub text2: String,
}

impl PredictRequest {
    /// Parses a JSON body and trims both texts.
    pub fn from_slice(body: &[u8]) -> Result<Self, GatewayError> {
        let request: Self = serde_json::from_slice(body)?;
        Ok(Self {
            text1: request.text1.trim().to_string(),
            text2: request.text2.trim().to_string(),
        })
    }

    /// Rejects requests where either text is empty.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.text1.is_empty() || self.text2.is_empty() {
            return Err(GatewayError::EmptyInput);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResponse {
    #[serde(rename = "similarity score")]
    pub similarity_score: f64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Raw `Content-Type` header, if present and printable.
pub fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

/// `application/json` or an `application/*+json` type, parameters ignored.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = content_type(headers) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// First [`LOG_PREVIEW_CHARS`] characters of `text`, for logs.
pub fn log_preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_trim() {
        let body = br#"{"text1": "  hello ", "text2": "\tworld\n"}"#;
        let request = PredictRequest::from_slice(body).expect("valid body");
        assert_eq!(request.text1, "hello");
        assert_eq!(request.text2, "world");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request = PredictRequest::from_slice(br#"{"text2": "world"}"#).expect("valid body");
        assert_eq!(request.text1, "");
        assert!(matches!(request.validate(), Err(GatewayError::EmptyInput)));

        let request = PredictRequest::from_slice(b"{}").expect("valid body");
        assert_eq!(request, PredictRequest::default());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let request =
            PredictRequest::from_slice(br#"{"text1": "a", "text2": "b", "lang": "en"}"#).unwrap();
        assert_eq!(request.text1, "a");
    }

    #[test]
    fn test_non_string_fields_fail() {
        for body in [
            br#"{"text1": 5, "text2": "b"}"#.as_slice(),
            br#"{"text1": null, "text2": "b"}"#.as_slice(),
            br#"{"text1": ["a"], "text2": "b"}"#.as_slice(),
        ] {
            let err = PredictRequest::from_slice(body).unwrap_err();
            assert!(matches!(err, GatewayError::MalformedBody(_)));
        }
    }

    #[test]
    fn test_non_object_body_fails() {
        for body in [
            b"[]".as_slice(),
            b"\"text\"".as_slice(),
            b"not json".as_slice(),
            b"".as_slice(),
        ] {
            assert!(PredictRequest::from_slice(body).is_err());
        }
    }

    #[test]
    fn test_response_field_name() {
        let json = serde_json::to_value(SimilarityResponse {
            similarity_score: 0.57,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"similarity score": 0.57}));
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with(
            "Application/JSON; charset=utf-8"
        )));
        assert!(is_json_content_type(&headers_with("application/merge-patch+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type(&HeaderMap::new()));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with("application/jsonx")));
        assert!(!is_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
    }

    #[test]
    fn test_log_preview_is_char_safe() {
        let text = "é".repeat(80);
        assert_eq!(log_preview(&text).chars().count(), LOG_PREVIEW_CHARS);
        assert_eq!(log_preview("short"), "short");
    }
}
