//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::endpoints::decode_response;
use crate::error::RestResult;
use crate::types::Account;
use coinbase_auth::{Credentials, RequestSigner};
use reqwest::blocking::Client;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Make an authenticated GET request
    ///
    /// The signed path must include the query string, if any.
    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let signer = RequestSigner::new(self.credentials, "GET", path);
        let url = format!("{}{}", self.base_url, path);

        debug!("Making authenticated request to {}", path);

        let mut request = self.client.get(&url);
        for (name, value) in signer.headers("") {
            request = request.header(name, value);
        }

        decode_response(request.send()?)
    }

    /// Get all account balances
    #[instrument(skip(self))]
    pub fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.get("/accounts/")
    }
}
