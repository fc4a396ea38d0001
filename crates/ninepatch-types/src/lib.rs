//! Foundation types for ninepatch.
//!
//! Shared by the decoder/compositor core and the command-line front end:
//! packed color keys, RGBA pixel buffers, padding insets, configuration,
//! and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod pixel;

pub use color::{Color, ColorKey};
pub use config::NinePatchConfig;
pub use error::{Axis, PatchError, Result};
pub use layout::{Insets, Padding};
pub use pixel::PixelBuffer;
