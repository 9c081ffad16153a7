//! Error types for scanlink-core

/// Result type alias for core protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Packet could not be serialized to YAML
    #[error("Failed to encode packet: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// Response body is not well-formed YAML
    #[error("Failed to decode response packet: {0}")]
    Decode(#[source] serde_yaml::Error),
}
