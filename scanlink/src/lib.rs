//! # scanlink
//!
//! Rust client for remote control of surface-inspection scanner devices.
//!
//! Commands travel as YAML packets over HTTPS. A caller registers with the
//! secret shown on the scanner's remote-control page, receives a client
//! secret, and issues commands with it.
//!
//! ## Features
//!
//! - Typed packet construction and YAML codec
//! - HTTPS transport tolerating the self-signed certificates scanners present
//! - Captured video frames decoded into in-memory images
//! - Comprehensive error handling
//!
//! ## Quick Start
//!
//! ```no_run
//! use scanlink::Scanner;
//!
//! #[tokio::main]
//! async fn main() -> scanlink::Result<()> {
//!     let mut scanner = Scanner::new("https://localhost:3003")?;
//!
//!     // Register with the secret shown on the device
//!     scanner.register("k28b1").await?;
//!
//!     // Issue commands
//!     scanner.start_scan().await?;
//!     scanner.get_state().await?;
//!     println!("state: {:?}", scanner.response_message());
//!
//!     scanner.disconnect();
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod scanner;

// Re-exports
pub use error::{Error, Result};
pub use scanner::Scanner;

// Re-export types
pub use scanlink_core::{Command, Endpoint, Packet, ResponsePacket, Session};
pub use scanlink_transport::{HttpTransport, RawResponse, Transport};
pub use scanlink_types::Frame;
