//! Error type shared by all client operations.

use std::fmt;

use reqwest::{Method, StatusCode};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classifies a failed call.
///
/// `Status` and `ApplicationStatus` are distinct channels: the first means
/// the server answered with a non-200 HTTP status, the second means the HTTP
/// round trip succeeded but the response body carried a non-zero
/// application status code.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Invalid configuration or input.
    Validation,
    /// The request could not be encoded as JSON.
    Serialization,
    /// The HTTP round trip could not be completed (connect, DNS, timeout,
    /// cancellation).
    Transport,
    /// The server answered with a non-200 HTTP status.
    Status,
    /// The response body could not be decoded into the expected type.
    Deserialization,
    /// The response carried a non-zero application status code.
    ApplicationStatus,
}

/// Error returned by all client operations.
///
/// Carries the failing operation's method and path, and where applicable the
/// HTTP status code, the raw response body, and the application status code.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    status: Option<StatusCode>,
    application_status: Option<i64>,
    body: Option<String>,
    source: Option<BoxError>,
}

impl Error {
    fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            application_status: None,
            body: None,
            source: None,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::new(Kind::Validation, message)
    }

    pub(crate) fn serialization(source: serde_json::Error) -> Self {
        let mut err = Self::new(Kind::Serialization, "failed to serialize request");
        err.source = Some(Box::new(source));
        err
    }

    pub(crate) fn transport(source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            "request timed out or was canceled"
        } else {
            "failed to complete request"
        };
        let mut err = Self::new(Kind::Transport, message);
        err.source = Some(Box::new(source));
        err
    }

    pub(crate) fn http_status(status: StatusCode, body: String) -> Self {
        let mut err = Self::new(Kind::Status, format!("unexpected status code {status}"));
        err.status = Some(status);
        err.body = Some(body);
        err
    }

    pub(crate) fn deserialization(source: serde_json::Error, body: String) -> Self {
        let mut err = Self::new(Kind::Deserialization, "failed to decode response");
        err.source = Some(Box::new(source));
        err.body = Some(body);
        err
    }

    pub(crate) fn app_status(code: i64) -> Self {
        let mut err = Self::new(
            Kind::ApplicationStatus,
            format!("application status code {code}"),
        );
        err.application_status = Some(code);
        err
    }

    /// Prefixes the failing operation's method and path.
    pub(crate) fn in_call(mut self, method: &Method, path: &str) -> Self {
        self.message = format!("{method} {path}: {}", self.message);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// HTTP status code, set for `Kind::Status`.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Application status code, set for `Kind::ApplicationStatus`.
    #[must_use]
    pub const fn application_status(&self) -> Option<i64> {
        self.application_status
    }

    /// Raw response body, set for `Kind::Status` and `Kind::Deserialization`.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(body) = &self.body {
            write!(f, ", body: {body}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::transport(source)
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        let mut err = Self::new(Kind::Validation, format!("invalid url: {source}"));
        err.source = Some(Box::new(source));
        err
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Method, StatusCode};

    use super::{Error, Kind};

    #[test]
    fn http_status_carries_code_and_body() {
        let err = Error::http_status(StatusCode::INTERNAL_SERVER_ERROR, "oops".to_owned());
        assert_eq!(err.kind(), Kind::Status);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.body(), Some("oops"));
        assert!(err.to_string().contains("500"), "display should name the status");
        assert!(err.to_string().contains("oops"), "display should include the body");
    }

    #[test]
    fn app_status_carries_code() {
        let err = Error::app_status(7).in_call(&Method::GET, "/v1/api/hello");
        assert_eq!(err.kind(), Kind::ApplicationStatus);
        assert_eq!(err.application_status(), Some(7));
        let display = err.to_string();
        assert!(display.contains("GET /v1/api/hello"), "display should carry context: {display}");
        assert!(display.contains('7'), "display should carry the code: {display}");
    }

    #[test]
    fn url_parse_error_is_validation() {
        let err = Error::from("not a url".parse::<url::Url>().unwrap_err());
        assert_eq!(err.kind(), Kind::Validation);
        assert!(std::error::Error::source(&err).is_some(), "cause must be chained");
    }
}
