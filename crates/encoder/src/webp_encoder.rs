//! libwebp-backed WebP encoder

use bytes::Bytes;
use capture::Frame;
use std::time::Instant;
use tracing::{debug, info};
use webp::{Encoder, WebPConfig};

use crate::{EncodedImage, EncoderConfig, EncoderError, EncoderResult, ImageEncoder};

/// Largest width/height the WebP container can express
const MAX_DIMENSION: u32 = 16383;

/// WebP still-image encoder
pub struct WebpEncoder {
    config: EncoderConfig,
    webp_config: WebPConfig,
}

impl WebpEncoder {
    /// Create an encoder, validating the configuration up front
    pub fn new(config: EncoderConfig) -> EncoderResult<Self> {
        config.validate()?;

        let mut webp_config = WebPConfig::new()
            .map_err(|_| EncoderError::InitFailed("WebPConfigInit failed".to_string()))?;

        webp_config.method = config.method as i32;
        if config.lossless {
            webp_config.lossless = 1;
            // Keep RGB values of transparent pixels so round-trips are
            // byte-identical.
            webp_config.exact = 1;
        } else {
            webp_config.quality = config.quality;
        }

        info!(
            "WebP encoder ready: quality {}, lossless {}, method {}",
            config.quality, config.lossless, config.method
        );

        Ok(Self {
            config,
            webp_config,
        })
    }
}

impl ImageEncoder for WebpEncoder {
    fn encode(&self, frame: &Frame) -> EncoderResult<EncodedImage> {
        if frame.width == 0
            || frame.height == 0
            || frame.width > MAX_DIMENSION
            || frame.height > MAX_DIMENSION
        {
            return Err(EncoderError::UnsupportedResolution {
                width: frame.width,
                height: frame.height,
            });
        }

        let start = Instant::now();
        let pixels = frame.packed_rgba();

        let memory = Encoder::from_rgba(&pixels, frame.width, frame.height)
            .encode_advanced(&self.webp_config)
            .map_err(|e| EncoderError::EncodingFailed(format!("{:?}", e)))?;

        if memory.is_empty() {
            return Err(EncoderError::EmptyOutput);
        }

        let encode_time_us = start.elapsed().as_micros() as u64;
        debug!(
            "Encoded {}x{} frame to {} bytes in {} us",
            frame.width,
            frame.height,
            memory.len(),
            encode_time_us
        );

        Ok(EncodedImage {
            data: Bytes::copy_from_slice(&memory),
            width: frame.width,
            height: frame.height,
            lossless: self.config.lossless,
            encode_time_us,
        })
    }

    fn config(&self) -> &EncoderConfig {
        &self.config
    }
}
