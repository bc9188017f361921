//! Image encoder trait abstraction

use bytes::Bytes;
use capture::Frame;

use crate::{EncoderError, EncoderResult};

/// Encoder configuration
#[derive(Debug, Clone, Copy)]
pub struct EncoderConfig {
    /// Quality factor (0 = smallest, 100 = best); ignored in lossless mode
    pub quality: f32,
    /// Preserve exact pixel values at the cost of larger output
    pub lossless: bool,
    /// Compression effort (0 = fastest, 6 = slowest/best)
    pub method: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quality: 80.0,
            lossless: false,
            method: 1,
        }
    }
}

impl EncoderConfig {
    /// Check the configuration before it reaches the codec
    pub fn validate(&self) -> EncoderResult<()> {
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(EncoderError::InvalidConfig(format!(
                "quality {} out of range 0-100",
                self.quality
            )));
        }
        if self.method > 6 {
            return Err(EncoderError::InvalidConfig(format!(
                "method {} out of range 0-6",
                self.method
            )));
        }
        Ok(())
    }
}

/// Encoded image output
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Encoded container bytes
    pub data: Bytes,
    /// Image width
    pub width: u32,
    /// Image height
    pub height: u32,
    /// Was this encoded losslessly?
    pub lossless: bool,
    /// Encoding took this many microseconds
    pub encode_time_us: u64,
}

/// Still-image encoder trait
pub trait ImageEncoder: Send {
    /// Encode a captured frame
    fn encode(&self, frame: &Frame) -> EncoderResult<EncodedImage>;

    /// Get current configuration
    fn config(&self) -> &EncoderConfig;
}
