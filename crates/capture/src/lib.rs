//! Screen Capture - virtual-desktop capture for Webshot
//!
//! Enumerates attached displays and captures the virtual screen: the
//! bounding rectangle of every monitor, stitched into a single RGBA frame.

mod backend;
mod error;
mod frame;
mod traits;

pub use backend::*;
pub use error::*;
pub use frame::*;
pub use traits::*;

use tracing::{debug, info};

/// Create a screen capture instance for this platform
pub fn create_capture() -> CaptureResult<Box<dyn ScreenCapture>> {
    Ok(Box::new(XcapCapture::new()?))
}

/// Bounding box of all displays in virtual-screen coordinates
pub fn virtual_bounds(displays: &[DisplayInfo]) -> CaptureResult<ScreenRect> {
    displays
        .iter()
        .map(|d| d.rect())
        .reduce(|acc, rect| acc.union(&rect))
        .ok_or(CaptureError::NoDisplays)
}

/// Capture the entire virtual screen as one packed RGBA frame.
///
/// Every display is captured and blitted into the union rect at its own
/// offset. Areas of the union no display covers are left transparent black.
pub fn capture_virtual_screen(backend: &mut dyn ScreenCapture) -> CaptureResult<Frame> {
    let displays = backend.displays()?;
    let bounds = virtual_bounds(&displays)?;

    info!(
        "Capturing virtual screen {}x{} across {} display(s)",
        bounds.width,
        bounds.height,
        displays.len()
    );

    let row_bytes = bounds.width as usize * 4;
    let mut canvas = vec![0u8; row_bytes * bounds.height as usize];

    for display in &displays {
        let frame = backend.capture_display(display)?;
        if frame.width == 0 || frame.height == 0 {
            continue;
        }
        let src = frame.packed_rgba();
        let src_stride = frame.width as usize * 4;

        let dst_w = display.width as usize;
        let dst_h = display.height as usize;
        let off_x = (display.x - bounds.x) as usize;
        let off_y = (display.y - bounds.y) as usize;

        // Bound outside the macro: tracing's expansion shadows `display`
        let display_id = display.id;
        debug!(
            "Blitting display {} at offset ({}, {}), {}x{} from a {}x{} frame",
            display_id, off_x, off_y, dst_w, dst_h, frame.width, frame.height
        );

        if frame.width as usize == dst_w && frame.height as usize == dst_h {
            for y in 0..dst_h {
                let dst_start = (off_y + y) * row_bytes + off_x * 4;
                let src_start = y * src_stride;
                canvas[dst_start..dst_start + dst_w * 4]
                    .copy_from_slice(&src[src_start..src_start + dst_w * 4]);
            }
        } else {
            // HiDPI backends hand back physical pixels for a logical rect.
            // Resample onto the advertised rect so the whole display lands
            // in the stitch and the blit never leaves its own rect.
            for y in 0..dst_h {
                let sy = y * frame.height as usize / dst_h;
                for x in 0..dst_w {
                    let sx = x * frame.width as usize / dst_w;
                    let dst_start = (off_y + y) * row_bytes + (off_x + x) * 4;
                    let src_start = sy * src_stride + sx * 4;
                    canvas[dst_start..dst_start + 4]
                        .copy_from_slice(&src[src_start..src_start + 4]);
                }
            }
        }
    }

    Frame::from_rgba(canvas, bounds.width, bounds.height)
}
