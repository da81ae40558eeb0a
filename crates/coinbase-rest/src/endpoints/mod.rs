//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};
use crate::types::ErrorMessage;
use reqwest::blocking::Response;
use reqwest::StatusCode;

/// Decode a venue response into `T`, mapping non-success payloads to the
/// error taxonomy
pub(crate) fn decode_response<T: serde::de::DeserializeOwned>(response: Response) -> RestResult<T> {
    let status = response.status();
    let body = response.text()?;

    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| RestError::Parse(e.to_string()))
    } else {
        Err(error_from_response(status, &body))
    }
}

/// Map a non-success status and body to a typed error
///
/// The venue reports failures as `{"message": "..."}`; a body that does
/// not parse as that shape is carried verbatim.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> RestError {
    let message = serde_json::from_str::<ErrorMessage>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        RestError::AuthenticationFailure(message)
    } else {
        RestError::from_venue_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_classification() {
        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Insufficient funds"}"#,
        );
        assert!(matches!(err, RestError::InsufficientFunds));

        let err = error_from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message":"size is too large. Maximum size is 10000"}"#,
        );
        assert!(matches!(err, RestError::OrderTooLarge { .. }));

        let err = error_from_response(
            StatusCode::NOT_FOUND,
            r#"{"message":"NotFound"}"#,
        );
        match err {
            RestError::Venue { message } => assert_eq!(message, "NotFound"),
            other => panic!("Expected Venue, got {:?}", other),
        }
    }

    #[test]
    fn test_auth_status_maps_to_auth_failure() {
        let err = error_from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"invalid signature"}"#,
        );
        match err {
            RestError::AuthenticationFailure(message) => {
                assert_eq!(message, "invalid signature");
            }
            other => panic!("Expected AuthenticationFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_body_kept_verbatim() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
        match err {
            RestError::Venue { message } => assert_eq!(message, "<html>Bad Gateway</html>"),
            other => panic!("Expected Venue, got {:?}", other),
        }
    }
}
