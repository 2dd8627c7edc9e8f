use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::Result;
use crate::error::Error;

/// Immutable client configuration.
///
/// Constructed once and owned by the [`Client`](crate::Client); read-only
/// thereafter.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base endpoint, e.g. `http://localhost:8080`.
    ///
    /// Kept as the raw string: the request URL is formed by plain
    /// concatenation with the operation path and signed as-is, so no URL
    /// normalization may be applied after construction.
    pub endpoint: String,
    pub api_key: String,
    pub api_secret: SecretString,
    /// Logs outgoing payloads and raw response bodies at debug level.
    pub debug: bool,
}

impl Config {
    /// Validates and builds a configuration.
    ///
    /// The endpoint must parse as a URL; the API key and secret must be
    /// non-empty.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        api_secret: SecretString,
        debug: bool,
    ) -> Result<Self> {
        Url::parse(endpoint)?;
        if api_key.is_empty() {
            return Err(Error::validation("api_key must not be empty"));
        }
        if api_secret.expose_secret().is_empty() {
            return Err(Error::validation("api_secret must not be empty"));
        }

        Ok(Self {
            endpoint: endpoint.to_owned(),
            api_key: api_key.to_owned(),
            api_secret,
            debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Kind;

    use super::Config;

    #[test]
    fn accepts_valid_config() {
        let config = Config::new("http://localhost:8080", "key", "secret".into(), true)
            .expect("config should validate");
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert!(config.debug, "debug flag should be preserved");
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let err = Config::new("not-a-url", "key", "secret".into(), false).unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn rejects_empty_api_key() {
        let err = Config::new("http://localhost", "", "secret".into(), false).unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);
    }

    #[test]
    fn rejects_empty_api_secret() {
        let err = Config::new("http://localhost", "key", "".into(), false).unwrap_err();
        assert_eq!(err.kind(), Kind::Validation);
    }
}
