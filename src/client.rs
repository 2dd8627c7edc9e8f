use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client as ReqwestClient, Method, StatusCode, header};
use secrecy::ExposeSecret as _;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Error;
use crate::sign::sign;
use crate::types::{ApiResponse, SUCCESS_STATUS_CODE};
use crate::Result;

pub const HEADER_ACCESS_KEY: &str = "ACCESS-KEY";
pub const HEADER_ACCESS_NONCE: &str = "ACCESS-NONCE";
pub const HEADER_ACCESS_SIGNATURE: &str = "ACCESS-SIGNATURE";

/// Signed JSON API client.
///
/// Holds no mutable state beyond the immutable [`Config`] and the underlying
/// HTTP transport; cloning is cheap and concurrent calls from the same
/// client are safe.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    client: ReqwestClient,
}

impl Client {
    /// Creates a client with a default HTTP transport.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_client(config, ReqwestClient::new())
    }

    /// Creates a client with a custom HTTP transport.
    ///
    /// Timeout and cancellation behavior follow the supplied transport's
    /// configuration; dropping an in-flight call future aborts the request.
    #[must_use]
    pub const fn with_client(config: Config, client: ReqwestClient) -> Self {
        Self { config, client }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Executes one signed request/response cycle.
    ///
    /// Serializes `request`, signs the call, dispatches it, checks the HTTP
    /// status, and decodes the body into `Res`. The application status code
    /// embedded in the response is NOT checked here; operations go through
    /// [`Client::call_checked`] for that.
    ///
    /// The request URL is the plain concatenation of the configured base
    /// endpoint and `path`; no normalization is applied, and the signature
    /// covers exactly the URL and body bytes that are sent.
    pub async fn call<Req, Res>(&self, method: Method, path: &str, request: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let payload = serde_json::to_string(request)
            .map_err(|e| Error::serialization(e).in_call(&method, path))?;
        if self.config.debug {
            tracing::debug!(%method, path, payload = %payload, "request");
        }

        let endpoint = format!("{}{path}", self.config.endpoint);
        let nonce = nonce();
        let signature = sign(
            self.config.api_secret.expose_secret(),
            nonce,
            &endpoint,
            payload.as_bytes(),
        );

        let response = self
            .client
            .request(method.clone(), &endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(HEADER_ACCESS_KEY, &self.config.api_key)
            .header(HEADER_ACCESS_NONCE, nonce.to_string())
            .header(HEADER_ACCESS_SIGNATURE, signature)
            .body(payload)
            .send()
            .await
            .map_err(|e| Error::transport(e).in_call(&method, path))?;

        // Draining the body here consumes the response on every exit path;
        // reqwest closes the connection stream when the response drops.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e).in_call(&method, path))?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            return Err(Error::http_status(status, body).in_call(&method, path));
        }

        let decoded = serde_json::from_slice::<Res>(&body).map_err(|e| {
            let body = String::from_utf8_lossy(&body).into_owned();
            Error::deserialization(e, body).in_call(&method, path)
        })?;
        if self.config.debug {
            tracing::debug!(%method, path, body = %String::from_utf8_lossy(&body), "response");
        }

        Ok(decoded)
    }

    /// Executes a call and verifies the embedded application status code.
    ///
    /// Every operation must perform this check: transport success does not
    /// imply business success.
    pub async fn call_checked<Req, Res>(
        &self,
        method: Method,
        path: &str,
        request: &Req,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned + ApiResponse,
    {
        let response = self.call::<Req, Res>(method.clone(), path, request).await?;
        if response.status_code() != SUCCESS_STATUS_CODE {
            return Err(Error::app_status(response.status_code()).in_call(&method, path));
        }
        Ok(response)
    }
}

/// Nanosecond wall-clock nonce.
///
/// Uniqueness relies on clock resolution; two calls in the same nanosecond
/// would collide.
fn nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards");
    now.as_nanos() as u64
}

#[cfg(test)]
mod tests {
    use super::nonce;

    #[test]
    fn nonce_is_nanosecond_scale() {
        // 2020-01-01 in nanoseconds; a wall-clock nonce must be past it.
        assert!(nonce() > 1_577_836_800_000_000_000, "nonce should be epoch nanoseconds");
    }

    #[test]
    fn nonce_does_not_repeat_across_distinct_instants() {
        let first = nonce();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = nonce();
        assert!(second > first, "nonce must increase over time");
    }
}
