//! Output naming and persistence

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;

/// Timestamp-derived default filename, e.g.
/// `screenshot_2026-08-25_14-03-59.webp`
pub fn default_filename(now: DateTime<Local>) -> String {
    now.format("screenshot_%Y-%m-%d_%H-%M-%S.webp").to_string()
}

/// Write the encoded bytes to `path`, creating or truncating the file
pub fn write_image(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}
