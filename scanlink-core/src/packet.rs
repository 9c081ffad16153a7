//! Request packet construction and YAML encoding

use serde::Serialize;
use tracing::trace;

use crate::{
    command::Command,
    constants::{COMMAND_PATH, REGISTER_PATH},
    error::{Error, Result},
};

/// Outgoing request packet
///
/// Exactly one of two shapes is produced per call. Each shape is wrapped in
/// its single-key envelope before serialization:
///
/// ```text
/// PacketRemoteRegister:        PacketRemoteCommand:
///   scanner_secret: k28b1        secret: abc123
///   version: 0                   value: ''
///                                command: START_SCAN
/// ```
///
/// # Examples
///
/// ```
/// use scanlink_core::{Command, Endpoint, Packet};
///
/// let packet = Packet::register("k28b1", 0);
/// assert_eq!(packet.endpoint(), Endpoint::Register);
///
/// let packet = Packet::command("abc123", Command::StartScan, "");
/// assert_eq!(packet.endpoint(), Endpoint::Command);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// Registration request carrying the secret shown on the scanner's
    /// remote-control page
    Register {
        scanner_secret: String,
        version: i64,
    },

    /// Command request authenticated by the client secret issued at
    /// registration
    Command {
        secret: String,
        value: String,
        command: Command,
    },
}

impl Packet {
    /// Create a registration packet
    pub fn register(scanner_secret: impl Into<String>, version: i64) -> Self {
        Self::Register {
            scanner_secret: scanner_secret.into(),
            version,
        }
    }

    /// Create a command packet
    ///
    /// `value` carries the command payload where one exists (a filename,
    /// nickname, or setting) and is the empty string otherwise.
    pub fn command(
        secret: impl Into<String>,
        command: Command,
        value: impl Into<String>,
    ) -> Self {
        Self::Command {
            secret: secret.into(),
            value: value.into(),
            command,
        }
    }

    /// Endpoint this packet must be posted to
    ///
    /// Derived from the packet shape, recomputed on every call.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Register { .. } => Endpoint::Register,
            Self::Command { .. } => Endpoint::Command,
        }
    }

    /// Serialize this packet to its YAML wire form
    ///
    /// Output is block-style YAML with the envelope key at the top level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String> {
        let text = match self {
            Self::Register {
                scanner_secret,
                version,
            } => serde_yaml::to_string(&RegisterEnvelope {
                packet: RegisterBody {
                    scanner_secret,
                    version: *version,
                },
            }),
            Self::Command {
                secret,
                value,
                command,
            } => serde_yaml::to_string(&CommandEnvelope {
                packet: CommandBody {
                    secret,
                    value,
                    command: *command,
                },
            }),
        }
        .map_err(Error::Encode)?;

        trace!(endpoint = %self.endpoint().path(), bytes = text.len(), "Encoded packet");

        Ok(text)
    }
}

/// Target endpoint derived from the packet shape
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/register` — registration packets
    Register,

    /// `/command` — command packets
    Command,
}

impl Endpoint {
    /// URL path for this endpoint
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => REGISTER_PATH,
            Self::Command => COMMAND_PATH,
        }
    }

    /// Full request URL for a scanner base URL
    ///
    /// A trailing slash on the base is tolerated.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[derive(Serialize)]
struct RegisterEnvelope<'a> {
    #[serde(rename = "PacketRemoteRegister")]
    packet: RegisterBody<'a>,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    scanner_secret: &'a str,
    version: i64,
}

#[derive(Serialize)]
struct CommandEnvelope<'a> {
    #[serde(rename = "PacketRemoteCommand")]
    packet: CommandBody<'a>,
}

// Field order matches the device's packet layout: secret, value, command.
#[derive(Serialize)]
struct CommandBody<'a> {
    secret: &'a str,
    value: &'a str,
    command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_packet_encoding() {
        let packet = Packet::register("k28b1", 0);

        assert_eq!(
            packet.encode().unwrap(),
            indoc! {"
                PacketRemoteRegister:
                  scanner_secret: k28b1
                  version: 0
            "}
        );
    }

    #[test]
    fn test_command_packet_encoding() {
        let packet = Packet::command("abc123", Command::StartScan, "");

        assert_eq!(
            packet.encode().unwrap(),
            indoc! {"
                PacketRemoteCommand:
                  secret: abc123
                  value: ''
                  command: START_SCAN
            "}
        );
    }

    #[test]
    fn test_command_packet_with_value() {
        let packet = Packet::command("abc123", Command::SetNickname, "weld-seam-4");

        assert_eq!(
            packet.encode().unwrap(),
            indoc! {"
                PacketRemoteCommand:
                  secret: abc123
                  value: weld-seam-4
                  command: SET_NICKNAME
            "}
        );
    }

    #[test]
    fn test_register_endpoint() {
        let packet = Packet::register("k28b1", 0);
        assert_eq!(packet.endpoint(), Endpoint::Register);
        assert_eq!(
            packet.endpoint().url("https://localhost:3003"),
            "https://localhost:3003/register"
        );
    }

    #[test]
    fn test_command_endpoint() {
        let packet = Packet::command("", Command::GetState, "");
        assert_eq!(packet.endpoint(), Endpoint::Command);
        assert_eq!(
            packet.endpoint().url("https://localhost:3003"),
            "https://localhost:3003/command"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        assert_eq!(
            Endpoint::Register.url("https://192.168.7.2:3003/"),
            "https://192.168.7.2:3003/register"
        );
    }

    #[test]
    fn test_empty_secret_encoding() {
        // Unregistered clients send an empty secret; the server rejects it
        let packet = Packet::command("", Command::StopScan, "");
        let yaml = packet.encode().unwrap();

        assert!(yaml.contains("secret: ''"));
    }
}
