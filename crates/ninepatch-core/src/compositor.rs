//! Compositing a patch image to an arbitrary size.
//!
//! Grid mode walks rows (vertical pieces) and columns (horizontal pieces) in
//! source order with a local `(x, y)` cursor. Static pieces keep their source
//! length; flexible pieces split the leftover length evenly. A cell whose
//! vertical piece is a repeat piece is pattern-filled with its unscaled
//! source tile; every other cell is a scaled copy. The horizontal kind never
//! selects tiling: a horizontal repeat piece in a non-repeat row is scaled.

use ninepatch_types::{Axis, Insets, PatchError, PixelBuffer, Result};

use crate::canvas::Canvas;
use crate::decoder::{Piece, SegmentKind};

/// Smallest source that holds two border lines around one interior pixel.
pub const MIN_SOURCE_SIZE: u32 = 3;

/// Output of the simple (bordered-image) path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRender {
    /// Source with the 1px marker border trimmed off.
    pub raster: PixelBuffer,
    /// Tile (rather than stretch) the horizontal band.
    pub repeat_h: bool,
    /// Tile (rather than stretch) the vertical band.
    pub repeat_v: bool,
    pub insets: Insets,
}

/// Output length of each piece along an axis of `out` pixels.
///
/// Flexible pieces share `out - static_sum` evenly; the remainder goes one
/// pixel each to the leading flexible pieces. With no flexible piece the
/// static lengths are returned unchanged.
pub fn fill_sizes(pieces: &[Piece], out: u32) -> Vec<u32> {
    let static_sum: u32 = pieces
        .iter()
        .filter(|p| !p.kind.is_flexible())
        .map(|p| p.length)
        .sum();
    let flexible = pieces.iter().filter(|p| p.kind.is_flexible()).count() as u32;
    let (even, mut remainder) = if flexible > 0 {
        let leftover = out.saturating_sub(static_sum);
        (leftover / flexible, leftover % flexible)
    } else {
        (0, 0)
    };

    pieces
        .iter()
        .map(|p| {
            if !p.kind.is_flexible() {
                p.length
            } else if remainder > 0 {
                remainder -= 1;
                even + 1
            } else {
                even
            }
        })
        .collect()
}

/// Advisory raised when no flexible piece can absorb a size mismatch.
pub fn stretch_advisory(axis: Axis, pieces: &[Piece], out: u32) -> Option<PatchError> {
    if pieces.iter().any(|p| p.kind.is_flexible()) {
        return None;
    }
    let fixed: u32 = pieces.iter().map(|p| p.length).sum();
    (fixed != out).then_some(PatchError::DegenerateStretch {
        axis,
        requested: out,
        fixed,
    })
}

fn check_source(source: &PixelBuffer) -> Result<()> {
    let (w, h) = source.dimensions();
    if w < MIN_SOURCE_SIZE || h < MIN_SOURCE_SIZE {
        return Err(PatchError::geometry(format!(
            "source is {w}x{h}, need at least {MIN_SOURCE_SIZE}x{MIN_SOURCE_SIZE}"
        )));
    }
    Ok(())
}

fn check_pieces(axis: Axis, pieces: &[Piece], extent: u32) -> Result<()> {
    if pieces.is_empty() {
        return Err(PatchError::geometry(format!("no {axis} pieces")));
    }
    if let Some(p) = pieces.iter().find(|p| p.offset == 0 || p.length == 0 || p.end() > extent) {
        return Err(PatchError::geometry(format!(
            "{axis} piece at {} (length {}) does not fit a source extent of {extent}",
            p.offset, p.length
        )));
    }
    Ok(())
}

/// Paint `source` into a new `out_w`x`out_h` raster following the pieces.
pub fn composite(
    source: &PixelBuffer,
    horizontal: &[Piece],
    vertical: &[Piece],
    out_w: u32,
    out_h: u32,
) -> Result<PixelBuffer> {
    check_source(source)?;
    check_pieces(Axis::Horizontal, horizontal, source.width())?;
    check_pieces(Axis::Vertical, vertical, source.height())?;
    if out_w == 0 || out_h == 0 {
        return Err(PatchError::geometry(format!(
            "output size {out_w}x{out_h} must be positive"
        )));
    }

    for advisory in [
        stretch_advisory(Axis::Horizontal, horizontal, out_w),
        stretch_advisory(Axis::Vertical, vertical, out_h),
    ]
    .into_iter()
    .flatten()
    {
        log::warn!("{advisory}");
    }

    let col_sizes = fill_sizes(horizontal, out_w);
    let row_sizes = fill_sizes(vertical, out_h);
    log::debug!("Compositing {out_w}x{out_h}: columns {col_sizes:?}, rows {row_sizes:?}");

    let mut canvas = Canvas::new(out_w, out_h);
    let mut y: i64 = 0;
    for (vp, &fill_h) in vertical.iter().zip(&row_sizes) {
        let mut x: i64 = 0;
        for (hp, &fill_w) in horizontal.iter().zip(&col_sizes) {
            if vp.kind == SegmentKind::Repeat {
                let tile = source.crop(hp.offset, vp.offset, hp.length, vp.length)?;
                canvas.fill_pattern(&tile, x, y, fill_w, fill_h);
            } else {
                canvas.blit_sub(
                    source, hp.offset, vp.offset, hp.length, vp.length, x, y, fill_w, fill_h,
                );
            }
            x += fill_w as i64;
        }
        y += fill_h as i64;
    }
    Ok(canvas.into_raster())
}

/// Trim the 1px marker border for the bordered-image path.
pub fn crop_simple(
    source: &PixelBuffer,
    horizontal: &[Piece],
    vertical: &[Piece],
    insets: Insets,
) -> Result<SimpleRender> {
    check_source(source)?;
    let (Some(h_band), Some(v_band)) = (horizontal.get(1), vertical.get(1)) else {
        return Err(PatchError::geometry("simple layout needs a middle band on both axes"));
    };
    let raster = source.crop(1, 1, source.width() - 2, source.height() - 2)?;
    Ok(SimpleRender {
        raster,
        repeat_h: h_band.kind == SegmentKind::Repeat,
        repeat_v: v_band.kind == SegmentKind::Repeat,
        insets,
    })
}
