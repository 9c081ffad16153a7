//! Transport layer for scanner remote control
//!
//! Provides the HTTPS packet exchange with a scanner device.

pub mod error;
pub mod http;

pub use error::{Error, Result};
pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;

/// Transport trait for posting packets to a scanner
///
/// The protocol is a single request-reply exchange per call; there is no
/// connection lifecycle to manage beyond the exchange itself.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a serialized packet and return the raw response
    ///
    /// Non-2xx statuses are returned inside [`RawResponse`], not as errors;
    /// only connection-level failures produce `Err`.
    async fn exchange(&self, url: &str, body: String) -> Result<RawResponse>;
}

/// Raw HTTP response from a scanner
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,

    /// Status reason phrase
    pub reason: String,

    /// Response body bytes (YAML text or raw image data)
    pub body: Bytes,
}

impl RawResponse {
    /// Check if the status code is in the success range (200-299)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Response body as text, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Build the rejection error for a non-2xx response
    ///
    /// Carries the status code, reason phrase, and body text (or a
    /// placeholder when the body is empty).
    pub fn reject(&self) -> Error {
        let body = if self.body.is_empty() {
            "No response body".to_string()
        } else {
            self.text()
        };

        Error::Rejected {
            status: self.status,
            reason: self.reason.clone(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_range() {
        let mut response = RawResponse {
            status: 200,
            reason: "OK".into(),
            body: Bytes::new(),
        };
        assert!(response.is_success());

        response.status = 204;
        assert!(response.is_success());

        response.status = 301;
        assert!(!response.is_success());

        response.status = 404;
        assert!(!response.is_success());
    }

    #[test]
    fn test_reject_carries_status_and_body() {
        let response = RawResponse {
            status: 403,
            reason: "Forbidden".into(),
            body: Bytes::from_static(b"bad secret"),
        };

        let message = response.reject().to_string();
        assert!(message.contains("403"));
        assert!(message.contains("Forbidden"));
        assert!(message.contains("bad secret"));
    }

    #[test]
    fn test_reject_empty_body_placeholder() {
        let response = RawResponse {
            status: 500,
            reason: "Internal Server Error".into(),
            body: Bytes::new(),
        };

        assert!(response.reject().to_string().contains("No response body"));
    }
}
