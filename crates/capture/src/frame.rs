//! Captured frame data structures

use bytes::Bytes;
use std::time::Instant;

use crate::{CaptureError, CaptureResult};

/// Pixel format of the captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// RGBA 8-bit per channel
    Rgba8,
    /// BGRA 8-bit per channel
    Bgra8,
}

impl PixelFormat {
    /// Bytes per pixel
    pub fn bytes_per_pixel(&self) -> usize {
        4
    }
}

/// A rectangle in virtual-screen coordinates.
///
/// Displays left of or above the primary display have negative origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Merge two rects into a bounding box
    pub fn union(&self, other: &ScreenRect) -> ScreenRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x as i64 + self.width as i64).max(other.x as i64 + other.width as i64);
        let bottom = (self.y as i64 + self.height as i64).max(other.y as i64 + other.height as i64);

        ScreenRect {
            x,
            y,
            width: (right - x as i64) as u32,
            height: (bottom - y as i64) as u32,
        }
    }

    /// Calculate area
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Display information
#[derive(Debug, Clone)]
pub struct DisplayInfo {
    /// Display ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// X position in virtual screen
    pub x: i32,
    /// Y position in virtual screen
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Scale factor (for HiDPI)
    pub scale: f32,
    /// Is this the primary display?
    pub is_primary: bool,
}

impl DisplayInfo {
    /// The display's rect in virtual-screen coordinates
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(self.x, self.y, self.width, self.height)
    }
}

/// Captured frame data
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data
    pub data: Bytes,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
    /// Stride (bytes per row, may include padding)
    pub stride: u32,
    /// Pixel format
    pub format: PixelFormat,
    /// Capture timestamp
    pub timestamp: Instant,
}

impl Frame {
    /// Create a frame, checking that the buffer covers `stride * height` bytes
    pub fn new(
        data: Bytes,
        width: u32,
        height: u32,
        stride: u32,
        format: PixelFormat,
    ) -> CaptureResult<Self> {
        let bpp = format.bytes_per_pixel() as u64;
        if (stride as u64) < width as u64 * bpp {
            return Err(CaptureError::InvalidFrame(format!(
                "stride {} too small for width {}",
                stride, width
            )));
        }
        if (data.len() as u64) < stride as u64 * height as u64 {
            return Err(CaptureError::InvalidFrame(format!(
                "buffer of {} bytes too small for {}x{} with stride {}",
                data.len(),
                width,
                height,
                stride
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
            timestamp: Instant::now(),
        })
    }

    /// Create a frame from a tightly packed RGBA buffer
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> CaptureResult<Self> {
        Frame::new(
            Bytes::from(data),
            width,
            height,
            width * 4,
            PixelFormat::Rgba8,
        )
    }

    /// Tightly packed RGBA pixels, top-down row order.
    ///
    /// Strips stride padding and swizzles BGRA sources. When the frame is
    /// already packed RGBA this is a cheap handle clone.
    pub fn packed_rgba(&self) -> Bytes {
        let row_bytes = self.width as usize * 4;
        let stride = self.stride as usize;

        if self.format == PixelFormat::Rgba8 && stride == row_bytes {
            return self.data.clone();
        }

        let mut packed = Vec::with_capacity(row_bytes * self.height as usize);
        for y in 0..self.height as usize {
            let row = &self.data[y * stride..y * stride + row_bytes];
            match self.format {
                PixelFormat::Rgba8 => packed.extend_from_slice(row),
                PixelFormat::Bgra8 => {
                    packed.extend(row.chunks_exact(4).flat_map(|px| [px[2], px[1], px[0], px[3]]))
                }
            }
        }

        Bytes::from(packed)
    }

    /// Convert BGRA to RGBA in place
    pub fn bgra_to_rgba(&mut self) {
        if self.format != PixelFormat::Bgra8 {
            return;
        }

        self.data = self.packed_rgba();
        self.stride = self.width * 4;
        self.format = PixelFormat::Rgba8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_disjoint_rects() {
        let a = ScreenRect::new(0, 0, 1920, 1080);
        let b = ScreenRect::new(1920, 0, 1280, 1024);

        let bounds = a.union(&b);
        assert_eq!(bounds, ScreenRect::new(0, 0, 3200, 1080));
    }

    #[test]
    fn test_union_negative_origin() {
        let primary = ScreenRect::new(0, 0, 2560, 1440);
        let left = ScreenRect::new(-1920, 200, 1920, 1080);

        let bounds = primary.union(&left);
        assert_eq!(bounds, ScreenRect::new(-1920, 0, 4480, 1440));
        assert_eq!(bounds.area(), 4480 * 1440);
    }

    #[test]
    fn test_frame_rejects_short_buffer() {
        let err = Frame::from_rgba(vec![0u8; 8], 2, 2).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFrame(_)));
    }

    #[test]
    fn test_packed_rgba_strips_stride_padding() {
        // 2x2 RGBA with 4 bytes of padding per row
        let mut data = Vec::new();
        for px in 0u8..4 {
            data.extend_from_slice(&[px, px, px, 255]);
            if px % 2 == 1 {
                data.extend_from_slice(&[0xAA; 4]); // row padding
            }
        }
        let frame = Frame::new(Bytes::from(data), 2, 2, 12, PixelFormat::Rgba8).unwrap();

        let packed = frame.packed_rgba();
        assert_eq!(packed.len(), 16);
        assert_eq!(&packed[..4], &[0, 0, 0, 255]);
        assert_eq!(&packed[12..], &[3, 3, 3, 255]);
    }

    #[test]
    fn test_bgra_to_rgba_swizzles_channels() {
        let mut frame = Frame::new(
            Bytes::from(vec![10, 20, 30, 255, 1, 2, 3, 4]),
            2,
            1,
            8,
            PixelFormat::Bgra8,
        )
        .unwrap();

        frame.bgra_to_rgba();
        assert_eq!(frame.format, PixelFormat::Rgba8);
        assert_eq!(&frame.data[..], &[30, 20, 10, 255, 3, 2, 1, 4]);
    }

    #[test]
    fn test_packed_rgba_is_cheap_when_already_packed() {
        let frame = Frame::from_rgba(vec![7u8; 16], 2, 2).unwrap();
        let packed = frame.packed_rgba();
        assert_eq!(&packed[..], &frame.data[..]);
    }
}
