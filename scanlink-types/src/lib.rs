//! Type definitions for scanlink

pub mod error;
pub mod frame;

pub use error::{Error, Result};
pub use frame::Frame;
