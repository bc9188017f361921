//! Image Encoder - WebP encoding for Webshot
//!
//! Wraps libwebp (via the `webp` crate) behind a small still-image
//! encoder abstraction.

mod error;
mod traits;
mod webp_encoder;

pub use error::*;
pub use traits::*;
pub use webp_encoder::*;
