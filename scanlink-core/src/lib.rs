//! # scanlink-core
//!
//! Core protocol implementation for surface-inspection scanner remote control.
//!
//! This crate provides the protocol primitives:
//! - Request packet construction and YAML encoding
//! - Response packet decoding
//! - Command definitions
//! - Client session state
//! - Protocol constants

pub mod command;
pub mod constants;
pub mod error;
pub mod packet;
pub mod response;
pub mod session;

pub use command::Command;
pub use error::{Error, Result};
pub use packet::{Endpoint, Packet};
pub use response::ResponsePacket;
pub use session::Session;
