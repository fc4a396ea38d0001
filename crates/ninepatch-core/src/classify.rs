//! Layout classification: single-band images versus general grids.

use serde::Serialize;

use crate::decoder::{Piece, SegmentKind};

/// How an image is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayoutMode {
    /// Exactly one flexible band per axis between two static bands. The
    /// cropped image can be handed to the host as a bordered-image
    /// declaration without per-cell compositing.
    Simple,
    /// Anything else; painted cell by cell.
    Grid,
}

fn is_single_band(pieces: &[Piece]) -> bool {
    matches!(
        pieces,
        [a, b, c] if a.kind == SegmentKind::Static
            && b.kind != SegmentKind::Static
            && c.kind == SegmentKind::Static
    )
}

/// Pick the rendering mode for a pair of piece sequences.
pub fn classify(horizontal: &[Piece], vertical: &[Piece]) -> LayoutMode {
    if is_single_band(horizontal) && is_single_band(vertical) {
        LayoutMode::Simple
    } else {
        LayoutMode::Grid
    }
}
