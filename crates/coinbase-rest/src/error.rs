//! Error types for REST API operations

use coinbase_types::{InvalidInterval, VenueErrorCode};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// The venue rejected the request's authentication
    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    /// The account cannot cover the order
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The order exceeds the venue's size cap
    #[error("Order size too large: {message}")]
    OrderTooLarge {
        /// Original venue message (carries the documented maximum)
        message: String,
    },

    /// Any other venue error, message preserved verbatim
    #[error("Venue error: {message}")]
    Venue {
        /// Original error message from the venue
        message: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// File I/O failed (CSV export)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl RestError {
    /// Create an error from a venue error message
    ///
    /// The two known order-rejection messages map to their typed variants;
    /// everything else is lumped into [`Self::Venue`] with the message
    /// preserved.
    pub fn from_venue_message(message: impl Into<String>) -> Self {
        let message = message.into();
        match VenueErrorCode::parse(&message) {
            VenueErrorCode::InsufficientFunds => Self::InsufficientFunds,
            VenueErrorCode::OrderTooLarge => Self::OrderTooLarge { message },
            VenueErrorCode::Other => Self::Venue { message },
        }
    }

    /// Check if this error came back from the venue (vs. transport/local)
    pub fn is_venue(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailure(_)
                | Self::InsufficientFunds
                | Self::OrderTooLarge { .. }
                | Self::Venue { .. }
        )
    }
}

impl From<coinbase_auth::AuthError> for RestError {
    fn from(err: coinbase_auth::AuthError) -> Self {
        match err {
            coinbase_auth::AuthError::InvalidCredentials(msg) => Self::AuthenticationFailure(msg),
            coinbase_auth::AuthError::EnvVarNotSet(var) => Self::EnvVarNotSet(var),
        }
    }
}

impl From<InvalidInterval> for RestError {
    fn from(err: InvalidInterval) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_venue_messages_mapped() {
        let err = RestError::from_venue_message("Insufficient funds");
        assert!(matches!(err, RestError::InsufficientFunds));

        let err = RestError::from_venue_message("size is too large. Maximum size is 10000");
        match err {
            RestError::OrderTooLarge { message } => {
                assert!(message.contains("10000"));
            }
            other => panic!("Expected OrderTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_venue_message_passes_through() {
        let err = RestError::from_venue_message("Insufficient funds available");
        match err {
            RestError::Venue { message } => {
                assert_eq!(message, "Insufficient funds available");
            }
            other => panic!("Expected Venue, got {:?}", other),
        }
    }

    #[test]
    fn test_is_venue() {
        assert!(RestError::InsufficientFunds.is_venue());
        assert!(RestError::Venue {
            message: "oops".to_string()
        }
        .is_venue());
        assert!(!RestError::AuthRequired.is_venue());
        assert!(!RestError::InvalidParameter("x".to_string()).is_venue());
    }

    #[test]
    fn test_invalid_interval_converts() {
        let err: RestError = "2w".parse::<coinbase_types::Interval>().unwrap_err().into();
        assert!(matches!(err, RestError::InvalidParameter(_)));
        assert!(err.to_string().contains("2w"));
    }
}
