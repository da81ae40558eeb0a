//! Mapping of known venue error messages
//!
//! The venue reports failures as a JSON body of the form
//! `{"message": "..."}` with no machine-readable code, so classification
//! works by exact match against the known message strings. Unmapped
//! messages fall through to [`VenueErrorCode::Other`] with the text
//! preserved by the caller.

/// Classified venue error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueErrorCode {
    /// "Insufficient funds" - the account cannot cover the order
    InsufficientFunds,
    /// "size is too large. Maximum size is 10000" - venue order size cap
    OrderTooLarge,
    /// Any other venue error message
    Other,
}

impl VenueErrorCode {
    /// Classify a venue error message
    ///
    /// Matching is exact: a structurally similar but textually different
    /// message is NOT matched and classifies as [`Self::Other`].
    pub fn parse(message: &str) -> Self {
        match message {
            "Insufficient funds" => Self::InsufficientFunds,
            "size is too large. Maximum size is 10000" => Self::OrderTooLarge,
            _ => Self::Other,
        }
    }

    /// Returns true if the message matched one of the known codes
    pub fn is_mapped(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages() {
        assert_eq!(
            VenueErrorCode::parse("Insufficient funds"),
            VenueErrorCode::InsufficientFunds
        );
        assert_eq!(
            VenueErrorCode::parse("size is too large. Maximum size is 10000"),
            VenueErrorCode::OrderTooLarge
        );
    }

    #[test]
    fn test_similar_messages_not_matched() {
        // Case and wording must match exactly
        assert_eq!(
            VenueErrorCode::parse("insufficient funds"),
            VenueErrorCode::Other
        );
        assert_eq!(
            VenueErrorCode::parse("Insufficient funds."),
            VenueErrorCode::Other
        );
        assert_eq!(
            VenueErrorCode::parse("size is too large. Maximum size is 20000"),
            VenueErrorCode::Other
        );
    }

    #[test]
    fn test_is_mapped() {
        assert!(VenueErrorCode::InsufficientFunds.is_mapped());
        assert!(VenueErrorCode::OrderTooLarge.is_mapped());
        assert!(!VenueErrorCode::Other.is_mapped());
    }
}
