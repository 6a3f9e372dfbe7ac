//! Error types for icon rendering and catalog output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering icons or writing the asset catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// A zero-sized canvas was requested.
    #[error("Invalid icon size {0}: size must be at least 1 pixel")]
    InvalidSize(u32),

    /// The drawing surface could not be allocated.
    #[error("Failed to allocate a {size}x{size} drawing surface")]
    Surface { size: u32 },

    /// A directory or file could not be created or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered canvas could not be encoded as PNG.
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The manifest could not be serialized or parsed.
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
