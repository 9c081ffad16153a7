//! Client session state
//!
//! A session tracks the client secret issued by the scanner at registration.
//! There is no further handshake state: the protocol is one request-reply
//! exchange per call, and the server enforces secret validity.

use tracing::debug;

/// Client-secret lifecycle for one scanner connection
///
/// Unregistered sessions present an empty secret; the scanner is expected to
/// reject commands carrying one. A session belongs to a single owner and is
/// not internally synchronized.
#[derive(Debug, Clone, Default)]
pub struct Session {
    secret: Option<String>,
}

impl Session {
    /// Create a new unregistered session
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a client secret is held
    pub fn is_registered(&self) -> bool {
        self.secret.is_some()
    }

    /// Store the client secret issued by the scanner
    pub fn register(&mut self, secret: impl Into<String>) {
        self.secret = Some(secret.into());
        debug!("Session registered");
    }

    /// Forget the client secret
    ///
    /// Subsequent commands carry an empty secret until re-registered.
    pub fn clear(&mut self) {
        self.secret = None;
        debug!("Session cleared");
    }

    /// The client secret, or the empty string when unregistered
    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert!(!session.is_registered());
        assert_eq!(session.secret(), "");
    }

    #[test]
    fn test_session_register() {
        let mut session = Session::new();
        session.register("abc123");

        assert!(session.is_registered());
        assert_eq!(session.secret(), "abc123");
    }

    #[test]
    fn test_session_clear() {
        let mut session = Session::new();
        session.register("abc123");
        session.clear();

        assert!(!session.is_registered());
        assert_eq!(session.secret(), "");
    }

    #[test]
    fn test_session_reregister() {
        let mut session = Session::new();
        session.register("first");
        session.register("second");

        assert_eq!(session.secret(), "second");
    }
}
