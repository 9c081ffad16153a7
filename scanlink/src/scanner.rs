//! High-level scanner interface

use tracing::{debug, info, warn};

use scanlink_core::constants::{DEFAULT_BASE_URL, PROTOCOL_VERSION};
use scanlink_core::{Command, Packet, ResponsePacket, Session};
use scanlink_transport::{HttpTransport, RawResponse, Transport};
use scanlink_types::Frame;

use crate::error::Result;

/// Surface-inspection scanner remote control
///
/// One instance per scanner connection. The scanner issues a client secret
/// at registration; every command after that carries it. The most recent
/// status response is kept and exposed through
/// [`response_status`](Self::response_status) /
/// [`response_message`](Self::response_message).
///
/// No ordering is enforced between operations: commands sent before
/// [`register`](Self::register) carry an empty secret and are rejected by
/// the device.
///
/// # Examples
///
/// ```no_run
/// use scanlink::Scanner;
///
/// #[tokio::main]
/// async fn main() -> scanlink::Result<()> {
///     let mut scanner = Scanner::new("https://192.168.7.2:3003")?;
///
///     scanner.register("k28b1").await?;
///     let frame = scanner.capture_frame().await?;
///     println!("captured {}x{}", frame.width(), frame.height());
///
///     scanner.disconnect();
///     Ok(())
/// }
/// ```
pub struct Scanner {
    transport: Box<dyn Transport>,
    base_url: String,
    session: Session,
    last_response: Option<ResponsePacket>,
}

impl Scanner {
    /// Create a scanner client for the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTPS client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(base_url, Box::new(transport)))
    }

    /// Create a scanner client with the default local base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTPS client cannot be initialized.
    pub fn new_local() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Create a scanner client over a caller-supplied transport
    pub fn with_transport(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            session: Session::new(),
            last_response: None,
        }
    }

    /// Scanner base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point this client at a different scanner
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Check if a client secret is held
    pub fn is_registered(&self) -> bool {
        self.session.is_registered()
    }

    /// Register with the scanner
    ///
    /// `scanner_secret` is the key shown on the device's remote-control
    /// page. The device answers with the issued client secret in the
    /// response `message` field; it is stored and sent with every
    /// subsequent command. Compatibility-sensitive: the secret-in-message
    /// convention is the device's registration contract.
    pub async fn register(&mut self, scanner_secret: &str) -> Result<()> {
        info!(base_url = %self.base_url, "Registering with scanner");

        let packet = Packet::register(scanner_secret, PROTOCOL_VERSION);
        let response = self.send_status(&packet).await?;

        let secret = response.message().unwrap_or_default().to_string();
        self.session.register(secret);
        self.last_response = Some(response);

        info!("Registered");
        Ok(())
    }

    /// Start scanning
    pub async fn start_scan(&mut self) -> Result<()> {
        self.command(Command::StartScan, "").await
    }

    /// Stop scanning
    pub async fn stop_scan(&mut self) -> Result<()> {
        self.command(Command::StopScan, "").await
    }

    /// Query the current scanner state
    pub async fn get_state(&mut self) -> Result<()> {
        self.command(Command::GetState, "").await
    }

    /// Set the nickname for the most recent scan or photo
    pub async fn set_nickname(&mut self, name: &str) -> Result<()> {
        self.command(Command::SetNickname, name).await
    }

    /// Require (or stop requiring) camera stillness before scanning
    pub async fn require_stillness(&mut self, required: bool) -> Result<()> {
        self.command(Command::RequireStill, required.to_string())
            .await
    }

    /// Require (or stop requiring) a QR marker before scanning
    pub async fn require_marker(&mut self, required: bool) -> Result<()> {
        self.command(Command::RequireMarker, required.to_string())
            .await
    }

    /// Set the camera sensor exposure time in nanoseconds
    pub async fn set_exposure_ns(&mut self, exposure_ns: u64) -> Result<()> {
        self.command(Command::Exposure, exposure_ns.to_string())
            .await
    }

    /// Set the camera sensor sensitivity (ISO)
    pub async fn set_sensitivity_iso(&mut self, sensitivity_iso: u32) -> Result<()> {
        self.command(Command::Sensitivity, sensitivity_iso.to_string())
            .await
    }

    /// Upload a scan to cloud storage
    pub async fn upload_scan(&mut self, file_name: &str) -> Result<()> {
        self.command(Command::UploadRemote, file_name).await
    }

    /// Request that the scanner send over the named file
    pub async fn get_file(&mut self, file_name: &str) -> Result<()> {
        self.command(Command::GetFile, file_name).await
    }

    /// Capture a frame from the scanner's video stream
    ///
    /// The response body is raw image data; it is decoded and returned
    /// directly. The stored status response is left untouched.
    pub async fn capture_frame(&mut self) -> Result<Frame> {
        let packet = Packet::command(self.session.secret(), Command::CaptureVideoFrame, "");
        let raw = self.dispatch(&packet).await?;

        let frame = Frame::decode(&raw.body)?;
        debug!(%frame, "Captured frame");

        Ok(frame)
    }

    /// Status string from the most recent response
    pub fn response_status(&self) -> Option<&str> {
        self.last_response.as_ref().and_then(|r| r.status())
    }

    /// Message string from the most recent response
    pub fn response_message(&self) -> Option<&str> {
        self.last_response.as_ref().and_then(|r| r.message())
    }

    /// The most recent decoded response packet
    pub fn last_response(&self) -> Option<&ResponsePacket> {
        self.last_response.as_ref()
    }

    /// Disconnect from the scanner
    ///
    /// Forgets the client secret; commands sent afterwards carry an empty
    /// secret until [`register`](Self::register) is called again.
    pub fn disconnect(&mut self) {
        info!("Disconnecting from scanner");
        self.session.clear();
    }

    // Helper methods

    async fn command(&mut self, command: Command, value: impl Into<String>) -> Result<()> {
        debug_assert!(!command.yields_image(), "image commands use capture_frame");

        let packet = Packet::command(self.session.secret(), command, value);
        let response = self.send_status(&packet).await?;

        debug!(
            %command,
            status = response.status().unwrap_or("<none>"),
            "Command completed"
        );

        self.last_response = Some(response);
        Ok(())
    }

    async fn send_status(&self, packet: &Packet) -> Result<ResponsePacket> {
        let raw = self.dispatch(packet).await?;
        Ok(ResponsePacket::decode(&raw.text())?)
    }

    async fn dispatch(&self, packet: &Packet) -> Result<RawResponse> {
        let body = packet.encode()?;
        let url = packet.endpoint().url(&self.base_url);

        let raw = self.transport.exchange(&url, body).await?;

        if !raw.is_success() {
            warn!(url = %url, status = raw.status, "Scanner rejected request");
            return Err(raw.reject().into());
        }

        Ok(raw)
    }
}
