//! Protocol constants

/// Protocol version sent in registration packets
pub const PROTOCOL_VERSION: i64 = 0;

/// Default scanner base URL (scanners serve HTTPS on the local network)
pub const DEFAULT_BASE_URL: &str = "https://localhost:3003";

/// Content type for all outgoing packets
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml";

/// Registration endpoint path
pub const REGISTER_PATH: &str = "/register";

/// Command endpoint path
pub const COMMAND_PATH: &str = "/command";
