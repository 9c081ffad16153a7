//! Response packet decoding

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// Decoded response packet
///
/// The scanner answers every status request with a YAML document wrapped in
/// the `PacketRemoteResponse` envelope:
///
/// ```text
/// PacketRemoteResponse:
///   response: success
///   message: abc123
/// ```
///
/// `response` and `message` are always expected; commands may attach further
/// fields, which are kept loosely in [`extra`](Self::extra) and accessed by
/// key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsePacket {
    /// Status string, `success` on accepted requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Human-readable message; registration responses carry the issued
    /// client secret here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Command-specific fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ResponsePacket {
    /// Decode a response from YAML text
    ///
    /// The value under the top-level `PacketRemoteResponse` key is returned;
    /// if the key is absent the packet is empty rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] on malformed YAML.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanlink_core::ResponsePacket;
    ///
    /// let packet =
    ///     ResponsePacket::decode("PacketRemoteResponse:\n  response: success\n").unwrap();
    /// assert!(packet.is_success());
    /// ```
    pub fn decode(text: &str) -> Result<Self> {
        let envelope: ResponseEnvelope =
            serde_yaml::from_str(text).map_err(Error::Decode)?;

        let packet = envelope.packet.unwrap_or_default();

        trace!(
            response = packet.status().unwrap_or("<none>"),
            extra_fields = packet.extra.len(),
            "Decoded response packet"
        );

        Ok(packet)
    }

    /// Serialize this response back into its enveloped YAML form
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String> {
        serde_yaml::to_string(&ResponseEnvelope {
            packet: Some(self.clone()),
        })
        .map_err(Error::Encode)
    }

    /// Status string from the `response` field
    pub fn status(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Message string from the `message` field
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Check if the scanner accepted the request
    ///
    /// Matches the status case-insensitively against `success`.
    pub fn is_success(&self) -> bool {
        self.status()
            .is_some_and(|status| status.eq_ignore_ascii_case("success"))
    }

    /// Look up a command-specific field by key
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.extra.get(key)
    }
}

#[derive(Serialize, Deserialize)]
struct ResponseEnvelope {
    #[serde(rename = "PacketRemoteResponse")]
    packet: Option<ResponsePacket>,
}
