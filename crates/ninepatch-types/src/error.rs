//! Error types for ninepatch.

use std::fmt;
use std::io;

/// Axis a piece sequence or size belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors produced while decoding or compositing a patch image.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("invalid patch geometry: {0}")]
    InvalidPatchGeometry(String),

    /// Advisory: no flexible piece can absorb the difference between the
    /// requested size and the fixed size along `axis`.
    #[error("degenerate stretch on {axis} axis: requested {requested}px, fixed {fixed}px")]
    DegenerateStretch {
        axis: Axis,
        requested: u32,
        fixed: u32,
    },

    /// Reserved for multi-band marker support.
    #[error("unsupported layout: {0}")]
    UnsupportedLayout(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PatchError {
    /// Shorthand for an [`PatchError::InvalidPatchGeometry`] error.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::InvalidPatchGeometry(msg.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PatchError>;
