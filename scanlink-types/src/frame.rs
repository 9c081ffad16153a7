//! Captured video frame

use std::fmt;

use image::{DynamicImage, ImageFormat};

use crate::error::Result;

/// A frame captured from the scanner's video stream
///
/// Holds the fully decoded bitmap together with the wire format it arrived
/// in. The scanner sends frames as raw encoded bytes (typically JPEG) with
/// no surrounding packet structure.
#[derive(Clone)]
pub struct Frame {
    image: DynamicImage,
    format: ImageFormat,
}

impl Frame {
    /// Decode a frame from raw response bytes
    ///
    /// The byte header is validated first, so unsupported or truncated
    /// payloads fail before any pixel data is materialized. A frame is
    /// either fully decoded or not produced at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImage`](crate::Error::InvalidImage) if the
    /// bytes are not a valid image in a supported format.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanlink_types::Frame;
    ///
    /// let result = Frame::decode(b"definitely not an image");
    /// assert!(result.is_err());
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        // Cheap structural check on the header before the real decode
        let format = image::guess_format(bytes)?;
        let image = image::load_from_memory_with_format(bytes, format)?;

        Ok(Self { image, format })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Wire format the frame was delivered in
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Borrow the decoded bitmap
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the frame, returning the decoded bitmap
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.format)
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame[{}x{}, {:?}]",
            self.width(),
            self.height(),
            self.format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([40, 80, 120]),
        ));
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(4, 3);
        let frame = Frame::decode(&bytes).unwrap();

        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.format(), ImageFormat::Png);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = Frame::decode(b"PacketRemoteResponse:\n  response: success\n");
        assert!(matches!(result, Err(crate::Error::InvalidImage(_))));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(Frame::decode(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_fails() {
        // Valid header, missing pixel data
        let bytes = png_bytes(4, 3);
        let result = Frame::decode(&bytes[..16]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let bytes = png_bytes(2, 2);
        let frame = Frame::decode(&bytes).unwrap();
        assert_eq!(frame.to_string(), "Frame[2x2, Png]");
    }
}
