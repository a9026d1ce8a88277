//! Wire-format tests for the shortly API endpoints.
//!
//! These tests verify the JSON shapes exchanged over HTTP without
//! requiring a running server or database.

use serde_json::json;

/// Test module for request/response types
mod type_tests {
    use super::*;

    #[test]
    fn test_shorten_request_serialization() {
        let request = json!({
            "url": "https://example.com"
        });

        assert_eq!(request["url"], "https://example.com");
    }

    #[test]
    fn test_shorten_request_empty_body() {
        let request = json!({});

        assert!(request["url"].is_null());
    }

    #[test]
    fn test_shorten_response_format() {
        let response = json!({
            "short_url": "http://localhost:5000/aB3xY9",
            "code": "aB3xY9"
        });

        let short_url = response["short_url"].as_str().unwrap();
        let code = response["code"].as_str().unwrap();
        assert!(short_url.ends_with(code));
    }

    #[test]
    fn test_error_response_format() {
        let error = json!({
            "error": "URL is required"
        });

        assert_eq!(error["error"], "URL is required");
    }

    #[test]
    fn test_health_response_format() {
        let health = json!({
            "status": "healthy",
            "database": { "status": "healthy", "latency_ms": 2 }
        });

        assert_eq!(health["status"], "healthy");
        assert_eq!(health["database"]["status"], "healthy");
    }
}

/// Test module for short code shape
mod short_code_tests {
    fn is_valid_short_code(code: &str) -> bool {
        code.len() == 6 && code.chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[test]
    fn test_valid_short_codes() {
        assert!(is_valid_short_code("abc123"));
        assert!(is_valid_short_code("ABCDEF"));
        assert!(is_valid_short_code("a1B2c3"));
    }

    #[test]
    fn test_invalid_short_codes_wrong_length() {
        assert!(!is_valid_short_code("abc12"));
        assert!(!is_valid_short_code("abc1234"));
        assert!(!is_valid_short_code(""));
    }

    #[test]
    fn test_invalid_short_codes_special_chars() {
        assert!(!is_valid_short_code("abc-12"));
        assert!(!is_valid_short_code("abc_12"));
        assert!(!is_valid_short_code("abc.12"));
    }
}

/// Test module for HTTP status usage
mod status_tests {
    use axum::http::StatusCode;

    #[test]
    fn test_http_status_codes() {
        // Successful shorten -> 200
        assert_eq!(StatusCode::OK.as_u16(), 200);
        // Redirect -> 302 Found
        assert_eq!(StatusCode::FOUND.as_u16(), 302);
        // Missing/empty url -> 400
        assert_eq!(StatusCode::BAD_REQUEST.as_u16(), 400);
        // Unknown code -> 404
        assert_eq!(StatusCode::NOT_FOUND.as_u16(), 404);
        // Storage failure -> 500
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), 500);
    }
}
