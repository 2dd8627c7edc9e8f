//! HMAC-signed JSON API client.
//!
//! Every request is authenticated with a per-request HMAC-SHA256 signature
//! computed over the nonce, the full request URL, and the JSON payload:
//! - generate a nanosecond-timestamp nonce
//! - sign `nonce || url || payload` with the shared API secret
//! - send with `ACCESS-KEY` / `ACCESS-NONCE` / `ACCESS-SIGNATURE` headers
//! - check the HTTP status, decode the JSON body, then check the
//!   application status code embedded in the response
//!
//! Transport success does not imply business success: a `200 OK` response
//! whose body carries a non-zero `status` field is still an error.
//!
//! ```rust,no_run
//! use hmac_client_sdk::{Client, Config, HelloRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new(
//!         "https://api.example.com",
//!         "my-api-key",
//!         "my-api-secret".into(),
//!         false,
//!     )?;
//!     let client = Client::new(config);
//!     let res = client.hello(&HelloRequest::new("achiku")).await?;
//!     println!("{}", res.message);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hello;
pub mod sign;
pub mod types;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Kind};
pub use hello::{HelloRequest, HelloResponse};
pub use types::{ApiResponse, SUCCESS_STATUS_CODE};

/// Result type alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
