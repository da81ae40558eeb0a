//! Authentication credentials for the Coinbase Pro API
//!
//! Implements HMAC-SHA256 signing as required by the private endpoints.
//!
//! # Security
//!
//! The signing secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// API credentials for authenticated requests
///
/// The signing secret is automatically zeroized when the Credentials are
/// dropped, preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Signing secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
    /// API passphrase (third secret component required by this venue)
    passphrase: String,
}

impl Credentials {
    /// Create new credentials from API key, secret, and passphrase
    ///
    /// # Arguments
    /// * `api_key` - Your API key
    /// * `secret` - Your signing secret (base64 encoded string)
    /// * `passphrase` - Your API passphrase
    ///
    /// # Returns
    /// Result containing Credentials, or an error if the secret is not
    /// valid base64.
    pub fn new(
        api_key: impl Into<String>,
        secret: impl AsRef<str>,
        passphrase: impl Into<String>,
    ) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret_str = secret.as_ref();

        let decoded = BASE64
            .decode(secret_str)
            .map_err(|e| AuthError::InvalidCredentials(format!("Invalid base64 secret: {}", e)))?;

        Ok(Self {
            api_key,
            secret: SecretBox::new(Box::new(decoded)),
            passphrase: passphrase.into(),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINBASE_API_KEY`, `COINBASE_API_SECRET`, and
    /// `COINBASE_PASSPHRASE` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        Self::from_env_vars(
            "COINBASE_API_KEY",
            "COINBASE_API_SECRET",
            "COINBASE_PASSPHRASE",
        )
    }

    /// Create sandbox credentials from environment variables
    ///
    /// Reads the `_SANDBOX`-suffixed variants: `COINBASE_API_KEY_SANDBOX`,
    /// `COINBASE_API_SECRET_SANDBOX`, and `COINBASE_PASSPHRASE_SANDBOX`.
    pub fn from_env_sandbox() -> AuthResult<Self> {
        Self::from_env_vars(
            "COINBASE_API_KEY_SANDBOX",
            "COINBASE_API_SECRET_SANDBOX",
            "COINBASE_PASSPHRASE_SANDBOX",
        )
    }

    fn from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> AuthResult<Self> {
        let api_key =
            std::env::var(key_var).map_err(|_| AuthError::EnvVarNotSet(key_var.to_string()))?;
        let secret = std::env::var(secret_var)
            .map_err(|_| AuthError::EnvVarNotSet(secret_var.to_string()))?;
        let passphrase = std::env::var(passphrase_var)
            .map_err(|_| AuthError::EnvVarNotSet(passphrase_var.to_string()))?;

        Self::new(api_key, secret, passphrase)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Current Unix time in fractional seconds, formatted as a string
    ///
    /// The venue rejects requests whose signed timestamp drifts from the
    /// `CB-ACCESS-TIMESTAMP` header, so callers must capture this once per
    /// request and use the same value in both places.
    pub fn timestamp() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        format!("{}", now.as_secs_f64())
    }

    /// Sign a request
    ///
    /// The signed message is the concatenation
    /// `timestamp || method || path || body`, keyed with the
    /// base64-decoded secret.
    ///
    /// # Arguments
    /// * `timestamp` - Fractional Unix seconds, as sent in the header
    /// * `method` - HTTP method, uppercase (e.g., "GET")
    /// * `path` - Request path including any query string
    /// * `body` - Raw request body, empty string for body-less requests
    ///
    /// # Returns
    /// Base64-encoded HMAC-SHA256 signature
    pub fn sign(&self, timestamp: &str, method: &str, path: &str, body: &str) -> String {
        // expose_secret() provides controlled access to the key
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(body.as_bytes());

        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
            passphrase: self.passphrase.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
