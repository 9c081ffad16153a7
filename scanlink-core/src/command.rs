//! Scanner command definitions

use std::fmt;

use serde::Serialize;

/// Remote-control commands accepted by the scanner
///
/// The wire form is the SCREAMING_SNAKE_CASE command name carried in the
/// `command` field of a command packet. The device may define further
/// commands; this enum covers the remote-control surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    // Scan control
    StartScan,
    StopScan,
    GetState,

    // Capture preconditions
    RequireStill,
    RequireMarker,

    // Camera sensor settings
    Exposure,
    Sensitivity,

    // Scan metadata and file transfer
    SetNickname,
    CaptureVideoFrame,
    UploadRemote,
    GetFile,
}

impl Command {
    /// Get the wire name carried in the packet's `command` field
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::StartScan => "START_SCAN",
            Self::StopScan => "STOP_SCAN",
            Self::GetState => "GET_STATE",
            Self::RequireStill => "REQUIRE_STILL",
            Self::RequireMarker => "REQUIRE_MARKER",
            Self::Exposure => "EXPOSURE",
            Self::Sensitivity => "SENSITIVITY",
            Self::SetNickname => "SET_NICKNAME",
            Self::CaptureVideoFrame => "CAPTURE_VIDEO_FRAME",
            Self::UploadRemote => "UPLOAD_REMOTE",
            Self::GetFile => "GET_FILE",
        }
    }

    /// Check if the scanner answers this command with raw image bytes
    /// instead of a YAML response packet
    pub fn yields_image(self) -> bool {
        matches!(self, Self::CaptureVideoFrame)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Command::StartScan.wire_name(), "START_SCAN");
        assert_eq!(Command::CaptureVideoFrame.wire_name(), "CAPTURE_VIDEO_FRAME");
        assert_eq!(Command::UploadRemote.wire_name(), "UPLOAD_REMOTE");
    }

    #[test]
    fn test_serde_name_matches_wire_name() {
        for command in [
            Command::StartScan,
            Command::StopScan,
            Command::GetState,
            Command::RequireStill,
            Command::RequireMarker,
            Command::Exposure,
            Command::Sensitivity,
            Command::SetNickname,
            Command::CaptureVideoFrame,
            Command::UploadRemote,
            Command::GetFile,
        ] {
            let yaml = serde_yaml::to_string(&command).unwrap();
            assert_eq!(yaml.trim(), command.wire_name());
        }
    }

    #[test]
    fn test_yields_image() {
        assert!(Command::CaptureVideoFrame.yields_image());
        assert!(!Command::StartScan.yields_image());
        assert!(!Command::GetFile.yields_image());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::GetState.to_string(), "GET_STATE");
    }
}
