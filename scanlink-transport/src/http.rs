//! HTTPS transport
//!
//! Scanners serve HTTPS with self-signed certificates on the local network,
//! so certificate verification is disabled on the client. Secrets travel
//! inside the YAML body, never in headers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, trace};

use scanlink_core::constants::YAML_CONTENT_TYPE;

use crate::{
    error::{Error, Result},
    RawResponse, Transport,
};

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTPS transport for scanner packets
///
/// # Examples
///
/// ```no_run
/// use scanlink_transport::{HttpTransport, Transport};
///
/// # async fn run() -> scanlink_transport::Result<()> {
/// let transport = HttpTransport::new()?;
/// let response = transport
///     .exchange("https://localhost:3003/command", "...".into())
///     .await?;
/// println!("status: {}", response.status);
/// # Ok(())
/// # }
/// ```
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a new transport
    ///
    /// The underlying client accepts any TLS certificate, matching the
    /// self-signed certificates scanner devices present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn exchange(&self, url: &str, body: String) -> Result<RawResponse> {
        debug!(url, bytes = body.len(), "Posting packet");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, YAML_CONTENT_TYPE)
            .body(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    Error::Request {
                        url: url.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();

        let body = response.bytes().await.map_err(|e| Error::Request {
            url: url.to_string(),
            source: e,
        })?;

        trace!(
            status = status.as_u16(),
            bytes = body.len(),
            "Received response"
        );

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // One-shot HTTP fixture: accepts a single connection, answers with the
    // given status line and body, then closes.
    async fn spawn_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await.unwrap();

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_exchange_success() {
        let base = spawn_server("200 OK", "PacketRemoteResponse:\n  response: success\n").await;
        let transport = HttpTransport::new().unwrap();

        let response = transport
            .exchange(&format!("{base}/command"), "packet".into())
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.status, 200);
        assert!(response.text().contains("success"));
    }

    #[tokio::test]
    async fn test_exchange_rejected_status() {
        let base = spawn_server("404 Not Found", "no such endpoint").await;
        let transport = HttpTransport::new().unwrap();

        let response = transport
            .exchange(&format!("{base}/register"), "packet".into())
            .await
            .unwrap();

        assert!(!response.is_success());

        let message = response.reject().to_string();
        assert!(message.contains("404"));
        assert!(message.contains("no such endpoint"));
    }

    #[tokio::test]
    async fn test_exchange_connection_refused() {
        // Nothing listens on port 9; expect a connection-level failure
        let transport = HttpTransport::new().unwrap();

        let result = transport
            .exchange("http://127.0.0.1:9/command", "packet".into())
            .await;

        assert!(matches!(result, Err(Error::Request { .. })));
    }
}
