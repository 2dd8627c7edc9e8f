//! Illustrative `hello` operation.
//!
//! Each concrete operation is a thin typed wrapper over
//! [`Client::call_checked`]: a fixed method and path, a request type
//! serialized into the body, and a response type carrying the application
//! status code.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::client::Client;
use crate::types::ApiResponse;

pub const HELLO_PATH: &str = "/v1/api/hello";

#[derive(Clone, Debug, Serialize)]
pub struct HelloRequest {
    pub name: String,
}

impl HelloRequest {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct HelloResponse {
    #[serde(rename = "status")]
    pub status_code: i64,
    pub message: String,
}

impl ApiResponse for HelloResponse {
    fn status_code(&self) -> i64 {
        self.status_code
    }
}

impl Client {
    /// Calls `GET /v1/api/hello`.
    ///
    /// Fails with an application status error when the response reports a
    /// non-zero status code, even on a `200 OK` transport status.
    pub async fn hello(&self, request: &HelloRequest) -> Result<HelloResponse> {
        self.call_checked(Method::GET, HELLO_PATH, request).await
    }
}
