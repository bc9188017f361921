//! Capture error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("No displays found")]
    NoDisplays,

    #[error("Display not found: {0}")]
    DisplayNotFound(u32),

    #[error("Display enumeration failed: {0}")]
    EnumerationFailed(String),

    #[error("Frame capture failed: {0}")]
    CaptureFailed(String),

    #[error("Invalid frame data: {0}")]
    InvalidFrame(String),
}

pub type CaptureResult<T> = Result<T, CaptureError>;
