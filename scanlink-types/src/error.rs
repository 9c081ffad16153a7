pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Payload bytes are not a valid or supported image
    #[error("Invalid image payload: {0}")]
    InvalidImage(#[from] image::ImageError),
}
