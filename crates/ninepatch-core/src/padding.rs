//! Content padding from the right column and bottom row.
//!
//! The padding border is read over its full length, corners included. The
//! first sample is the baseline; the first and last divergent samples between
//! the corners bound the content area. Without any divergent sample the
//! padding falls back to the outer piece lengths of the same axis.

use ninepatch_types::{ColorKey, Padding, PatchError, Result};

use crate::decoder::Piece;

/// Resolve the padding encoded on `border_line`.
///
/// `pieces` is the piece sequence of the axis the line runs along; its first
/// and last lengths are used when the line carries no marker.
pub fn resolve(border_line: &[ColorKey], pieces: &[Piece]) -> Result<Padding> {
    let (Some(first), Some(last)) = (pieces.first(), pieces.last()) else {
        return Err(PatchError::geometry("padding fallback needs at least one piece"));
    };
    let fallback = Padding::new(first.length, last.length);

    let Some(&baseline) = border_line.first() else {
        return Ok(fallback);
    };
    if border_line.len() < 3 {
        return Ok(fallback);
    }
    let tail = border_line.len() - 2;

    let Some(begin) = (1..=tail).find(|&i| border_line[i] != baseline) else {
        return Ok(fallback);
    };
    // A forward hit guarantees a backward hit at or after it.
    let end = (begin..=tail)
        .rev()
        .find(|&i| border_line[i] != baseline)
        .unwrap_or(begin);

    Ok(Padding::new((begin - 1) as u32, (tail - end) as u32))
}
