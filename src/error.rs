//! Error types for the icon generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// The PNG imaging capability was not compiled into this build
    #[error("Imaging capability unavailable: {0}")]
    MissingCapability(String),

    /// A canvas size of zero was requested
    #[error("Invalid icon size {0}: size must be a positive integer")]
    InvalidSize(u32),

    /// The canvas for this size cannot be allocated
    #[error("Canvas of {0}x{0} pixels is too large to allocate")]
    CanvasTooLarge(u32),

    /// Creating the output directory or writing an icon failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoder rejected the canvas
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error should take the install-hint path in the CLI
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Error::MissingCapability(_))
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(e) => Error::MissingCapability(e.to_string()),
            other => Error::Encode(other.to_string()),
        }
    }
}
