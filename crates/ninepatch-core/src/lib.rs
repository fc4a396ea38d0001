//! ninepatch-core: decode and composite nine-patch images.
//!
//! A patch image carries a 1px marker border. The top row and left column
//! segment the interior into static, dynamic (stretched), and repeat (tiled)
//! pieces; the right column and bottom row encode content padding. This
//! crate decodes those markers, classifies the layout, and paints the image
//! into a raster of any requested size. Everything here is pure and
//! synchronous over in-memory buffers.

pub mod canvas;
pub mod classify;
pub mod codec;
pub mod compositor;
pub mod decoder;
pub mod padding;
pub mod patch;
pub mod style;

#[cfg(test)]
pub(crate) mod test_utils;

pub use ninepatch_types as types;
pub use ninepatch_types::{
    Axis, Color, ColorKey, Insets, NinePatchConfig, Padding, PatchError, PixelBuffer, Result,
};

pub use classify::{LayoutMode, classify};
pub use compositor::{SimpleRender, composite};
pub use decoder::{Piece, SegmentKind, decode};
pub use padding::resolve;
pub use patch::{GridRender, NinePatch, PatchReport, Render};
pub use style::{StyleDeclarations, declarations};
