//! Production capture backend built on the `xcap` crate.
//!
//! xcap covers Windows, macOS and Linux (X11 and Wayland) behind one
//! monitor-enumeration API, so there is a single backend rather than one
//! per platform.

use tracing::debug;
use xcap::Monitor;

use crate::{CaptureError, CaptureResult, DisplayInfo, Frame, ScreenCapture};

/// Screen capture via `xcap::Monitor`
pub struct XcapCapture;

impl XcapCapture {
    pub fn new() -> CaptureResult<Self> {
        Ok(Self)
    }

    fn monitors() -> CaptureResult<Vec<Monitor>> {
        Monitor::all().map_err(|e| CaptureError::EnumerationFailed(e.to_string()))
    }
}

impl Default for XcapCapture {
    fn default() -> Self {
        Self
    }
}

impl ScreenCapture for XcapCapture {
    fn displays(&self) -> CaptureResult<Vec<DisplayInfo>> {
        let monitors = Self::monitors()?;
        if monitors.is_empty() {
            return Err(CaptureError::NoDisplays);
        }

        Ok(monitors
            .iter()
            .map(|m| DisplayInfo {
                id: m.id(),
                name: m.name().to_string(),
                x: m.x(),
                y: m.y(),
                width: m.width(),
                height: m.height(),
                scale: m.scale_factor(),
                is_primary: m.is_primary(),
            })
            .collect())
    }

    fn capture_display(&mut self, display: &DisplayInfo) -> CaptureResult<Frame> {
        let monitors = Self::monitors()?;
        let monitor = monitors
            .iter()
            .find(|m| m.id() == display.id)
            .ok_or(CaptureError::DisplayNotFound(display.id))?;

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        let (width, height) = (image.width(), image.height());
        // Bound outside the macro: tracing's expansion shadows `display`
        let (display_id, display_name) = (display.id, display.name.as_str());
        debug!(
            "Captured display {} ({}): {}x{}",
            display_id, display_name, width, height
        );

        Frame::from_rgba(image.into_raw(), width, height)
    }
}
