//! Decoded patch image and its render entry points.

use serde::Serialize;

use ninepatch_types::{Axis, Insets, PatchError, PixelBuffer, Result};

use crate::classify::{LayoutMode, classify};
use crate::compositor::{self, MIN_SOURCE_SIZE, SimpleRender};
use crate::decoder::{self, Piece};
use crate::padding;

/// Output of the general compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRender {
    /// Raster of exactly the requested size.
    pub raster: PixelBuffer,
    pub insets: Insets,
}

/// Result of rendering a patch image for a host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Simple(SimpleRender),
    Grid(GridRender),
}

impl Render {
    pub fn raster(&self) -> &PixelBuffer {
        match self {
            Self::Simple(s) => &s.raster,
            Self::Grid(g) => &g.raster,
        }
    }

    pub fn insets(&self) -> Insets {
        match self {
            Self::Simple(s) => s.insets,
            Self::Grid(g) => g.insets,
        }
    }
}

/// Serializable summary of a decoded patch image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub width: u32,
    pub height: u32,
    pub mode: LayoutMode,
    pub insets: Insets,
    pub horizontal: Vec<Piece>,
    pub vertical: Vec<Piece>,
}

/// A patch image with its border markers decoded.
///
/// Decoding happens once; every render call is an independent, pure
/// recomposite of the borrowed source.
#[derive(Debug, Clone)]
pub struct NinePatch<'a> {
    image: &'a PixelBuffer,
    horizontal: Vec<Piece>,
    vertical: Vec<Piece>,
    insets: Insets,
    mode: LayoutMode,
}

impl<'a> NinePatch<'a> {
    /// Decode the stretch map, padding, and layout mode of `image`.
    ///
    /// The top-left pixel is the static sentinel and the top-right pixel the
    /// repeat sentinel for both axes. The right column yields top/bottom
    /// padding and the bottom row yields left/right padding.
    pub fn decode(image: &'a PixelBuffer) -> Result<Self> {
        let (w, h) = image.dimensions();
        if w < MIN_SOURCE_SIZE || h < MIN_SOURCE_SIZE {
            return Err(PatchError::geometry(format!(
                "patch image is {w}x{h}, need at least {MIN_SOURCE_SIZE}x{MIN_SOURCE_SIZE}"
            )));
        }

        let top = image.row_keys(0);
        let static_color = top[0];
        let repeat_color = top[top.len() - 1];
        let horizontal = decoder::decode(&top[1..top.len() - 1], static_color, repeat_color)?;

        let left = image.column_keys(0);
        let vertical = decoder::decode(&left[1..left.len() - 1], static_color, repeat_color)?;

        let vertical_pad = padding::resolve(&image.column_keys(w - 1), &vertical)?;
        let horizontal_pad = padding::resolve(&image.row_keys(h - 1), &horizontal)?;
        let insets = Insets::from_axes(vertical_pad, horizontal_pad);

        let mode = classify(&horizontal, &vertical);
        log::debug!(
            "Decoded {w}x{h} patch: {} horizontal / {} vertical pieces, {mode:?}, insets {insets:?}",
            horizontal.len(),
            vertical.len(),
        );

        Ok(Self {
            image,
            horizontal,
            vertical,
            insets,
            mode,
        })
    }

    pub fn horizontal(&self) -> &[Piece] {
        &self.horizontal
    }

    pub fn vertical(&self) -> &[Piece] {
        &self.vertical
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Render for an element of outer size `width`x`height`.
    ///
    /// Simple layouts ignore the size: the host stretches or repeats the
    /// cropped image itself.
    pub fn render(&self, width: u32, height: u32) -> Result<Render> {
        match self.mode {
            LayoutMode::Simple => Ok(Render::Simple(compositor::crop_simple(
                self.image,
                &self.horizontal,
                &self.vertical,
                self.insets,
            )?)),
            LayoutMode::Grid => Ok(Render::Grid(GridRender {
                raster: self.render_grid(width, height)?,
                insets: self.insets,
            })),
        }
    }

    /// Render for an element whose content box is `width`x`height`; the
    /// output grows by the decoded padding on each side.
    pub fn render_for_content(&self, width: u32, height: u32) -> Result<Render> {
        let (w, h) = self.insets.outer_size(width, height);
        self.render(w, h)
    }

    /// Composite cell by cell regardless of the classified mode.
    pub fn render_grid(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        compositor::composite(self.image, &self.horizontal, &self.vertical, width, height)
    }

    /// Advisories for a requested size on axes without flexible pieces.
    pub fn stretch_advisories(&self, width: u32, height: u32) -> Vec<PatchError> {
        [
            compositor::stretch_advisory(Axis::Horizontal, &self.horizontal, width),
            compositor::stretch_advisory(Axis::Vertical, &self.vertical, height),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn report(&self) -> PatchReport {
        PatchReport {
            width: self.image.width(),
            height: self.image.height(),
            mode: self.mode,
            insets: self.insets,
            horizontal: self.horizontal.clone(),
            vertical: self.vertical.clone(),
        }
    }
}
