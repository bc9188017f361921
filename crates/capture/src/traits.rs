//! Screen capture trait abstraction

use crate::{CaptureResult, DisplayInfo, Frame};

/// Screen capture trait
pub trait ScreenCapture: Send {
    /// Get available displays
    fn displays(&self) -> CaptureResult<Vec<DisplayInfo>>;

    /// Capture a single frame from one display (blocking)
    fn capture_display(&mut self, display: &DisplayInfo) -> CaptureResult<Frame>;
}
