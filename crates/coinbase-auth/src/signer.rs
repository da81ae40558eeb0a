//! Signed request header construction

use crate::credentials::Credentials;

/// Request signer for building authenticated requests
///
/// Captures a single timestamp at construction so the value signed into
/// the message and the value sent in `CB-ACCESS-TIMESTAMP` always agree;
/// a mismatch is rejected venue-side as clock skew.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    method: String,
    path: String,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    ///
    /// # Arguments
    /// * `method` - HTTP method, uppercase (e.g., "GET")
    /// * `path` - Request path including any query string
    ///   (e.g., "/orders?status=all")
    pub fn new(
        credentials: &'a Credentials,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            method: method.into(),
            path: path.into(),
            timestamp: Credentials::timestamp(),
        }
    }

    /// Get the timestamp captured for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request with the given body
    pub fn sign(&self, body: &str) -> String {
        self.credentials
            .sign(&self.timestamp, &self.method, &self.path, body)
    }

    /// Produce the full authentication header set for the given body
    pub fn headers(&self, body: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            ("CB-ACCESS-SIGN", self.sign(body)),
            ("CB-ACCESS-TIMESTAMP", self.timestamp.clone()),
            ("CB-ACCESS-KEY", self.credentials.api_key().to_string()),
            (
                "CB-ACCESS-PASSPHRASE",
                self.credentials.passphrase().to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test_api_key", "dGVzdF9zZWNyZXRfa2V5", "hunter2").unwrap()
    }

    #[test]
    fn test_header_set_complete() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds, "GET", "/accounts/");
        let headers = signer.headers("");

        let names: Vec<&str> = headers.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "Content-Type",
                "CB-ACCESS-SIGN",
                "CB-ACCESS-TIMESTAMP",
                "CB-ACCESS-KEY",
                "CB-ACCESS-PASSPHRASE",
            ]
        );

        let value = |name: &str| {
            headers
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(value("Content-Type"), "application/json");
        assert_eq!(value("CB-ACCESS-KEY"), "test_api_key");
        assert_eq!(value("CB-ACCESS-PASSPHRASE"), "hunter2");
    }

    #[test]
    fn test_header_timestamp_matches_signed_message() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds, "POST", "/orders/");
        let body = "{\"size\":\"1\"}";
        let headers = signer.headers(body);

        let header_ts = headers
            .iter()
            .find(|(n, _)| *n == "CB-ACCESS-TIMESTAMP")
            .map(|(_, v)| v.clone())
            .unwrap();
        let header_sig = headers
            .iter()
            .find(|(n, _)| *n == "CB-ACCESS-SIGN")
            .map(|(_, v)| v.clone())
            .unwrap();

        // Re-signing with the header's timestamp reproduces the header's
        // signature: the two cannot drift apart.
        assert_eq!(header_ts, signer.timestamp());
        assert_eq!(
            header_sig,
            creds.sign(&header_ts, "POST", "/orders/", body)
        );
    }

    #[test]
    fn test_timestamp_captured_once() {
        let creds = test_credentials();
        let signer = RequestSigner::new(&creds, "GET", "/accounts/");
        let first = signer.timestamp().to_string();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(signer.timestamp(), first);
    }
}
