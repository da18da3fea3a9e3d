use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid shape: {height}x{width}")]
    InvalidShape { height: usize, width: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No command bound to key {0:?}")]
    UnknownKey(char),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ViewportError>;
