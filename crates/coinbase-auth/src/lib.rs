//! Request signing for the Coinbase Pro API
//!
//! Private endpoints authenticate each request with a header set derived
//! from three secrets (API key, base64-encoded signing secret, passphrase)
//! plus a per-request timestamp. The signature is
//! base64(HMAC-SHA256(secret, timestamp || method || path || body)).
//!
//! # Example
//!
//! ```no_run
//! use coinbase_auth::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(&creds, "GET", "/accounts/");
//! for (name, value) in signer.headers("") {
//!     println!("{}: {}", name, value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod error;
pub mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::RequestSigner;
