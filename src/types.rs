//! Shared API types.

/// Application status code meaning success.
pub const SUCCESS_STATUS_CODE: i64 = 0;

/// Implemented by response types that embed an application status code.
///
/// The application status is a second error channel orthogonal to the HTTP
/// status: a `200 OK` response whose status code is non-zero is a failed
/// call. [`Client::call_checked`](crate::Client::call_checked) enforces this
/// for every operation.
pub trait ApiResponse {
    /// Application-level status code; [`SUCCESS_STATUS_CODE`] means success.
    fn status_code(&self) -> i64;
}
