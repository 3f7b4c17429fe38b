//! Error types for the converter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the conversion pipeline.
///
/// Per-file errors are caught at the single-file level by the walker;
/// only the root-path check is fatal to a run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Root path does not exist; no walk is performed
    #[error("Root path not found: {0}")]
    RootNotFound(PathBuf),

    /// Image decoding failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// WebP encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Camera-native decode backend (external utility) failed
    #[error("Camera decode error: {0}")]
    CameraDecode(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

// Helper methods for error creation
impl ConvertError {
    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn camera_decode<T: Into<String>>(msg: T) -> Self {
        Self::CameraDecode(msg.into())
    }
}

// Convert std::io::Error to ConvertError
impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// The image crate is only used on the decode side; encoding goes through libwebp.
impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}
