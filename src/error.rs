use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid noise config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Preview size must be non-zero, got {width}x{height}")]
    EmptyPreview { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
