//! Border-line decoding into typed pieces.
//!
//! The top row and left column of a patch image carry the stretch map. Each
//! pixel between the two corners is classified against two sentinel colors
//! sampled from the corners of the top row: a match with the top-left corner
//! marks a static pixel, a match with the top-right corner marks a repeat
//! pixel, and anything else is dynamic. Runs of equal kind form pieces.

use serde::Serialize;

use ninepatch_types::{ColorKey, PatchError, Result};

/// How a piece behaves when the output size differs from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentKind {
    /// Drawn at native size.
    Static,
    /// Pattern-tiled at native tile size.
    Repeat,
    /// Stretched to share leftover space.
    Dynamic,
}

impl SegmentKind {
    /// Classify a sample. Static wins when both sentinels are equal.
    pub fn classify(color: ColorKey, static_color: ColorKey, repeat_color: ColorKey) -> Self {
        if color == static_color {
            Self::Static
        } else if color == repeat_color {
            Self::Repeat
        } else {
            Self::Dynamic
        }
    }

    /// Whether the piece takes a share of the leftover space.
    pub fn is_flexible(self) -> bool {
        self != Self::Static
    }
}

/// A maximal run of same-kind border pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: SegmentKind,
    /// 1-based start position along the border line. Equals the source
    /// image coordinate of the first interior pixel the piece covers.
    pub offset: u32,
    pub length: u32,
}

impl Piece {
    pub const fn new(kind: SegmentKind, offset: u32, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// One past the last covered position.
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }
}

/// Decode one border line (corners already excluded) into pieces.
///
/// Positions are 1-based: `line[0]` is position 1. The returned pieces
/// partition `[1, line.len()]` without gaps.
pub fn decode(
    line: &[ColorKey],
    static_color: ColorKey,
    repeat_color: ColorKey,
) -> Result<Vec<Piece>> {
    let Some((&first, rest)) = line.split_first() else {
        return Err(PatchError::geometry("border line has no pixels between its corners"));
    };
    let n = line.len() as u32;

    let mut pieces = Vec::new();
    let mut run_kind = SegmentKind::classify(first, static_color, repeat_color);
    let mut start = 1u32;

    for (i, &color) in rest.iter().enumerate() {
        let pos = i as u32 + 2;
        let kind = SegmentKind::classify(color, static_color, repeat_color);
        if kind != run_kind {
            pieces.push(Piece::new(run_kind, start, pos - start));
            run_kind = kind;
            start = pos;
        }
    }

    // The scan only closes runs on a kind change; the last position still
    // belongs to the open run.
    pieces.push(Piece::new(run_kind, start, n - start + 1));
    Ok(pieces)
}

/// Total length covered by a piece sequence.
pub fn total_length(pieces: &[Piece]) -> u32 {
    pieces.iter().map(|p| p.length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: ColorKey = ColorKey(0x0000_00FF);
    const R: ColorKey = ColorKey(0xFF00_00FF);
    const D: ColorKey = ColorKey(0xFFFF_FFFF);

    #[test]
    fn classify_prefers_static() {
        assert_eq!(SegmentKind::classify(S, S, S), SegmentKind::Static);
        assert_eq!(SegmentKind::classify(R, S, R), SegmentKind::Repeat);
        assert_eq!(SegmentKind::classify(D, S, R), SegmentKind::Dynamic);
    }

    #[test]
    fn flexible_kinds() {
        assert!(!SegmentKind::Static.is_flexible());
        assert!(SegmentKind::Dynamic.is_flexible());
        assert!(SegmentKind::Repeat.is_flexible());
    }

    #[test]
    fn decodes_three_bands() {
        let line = [S, D, D, D, S];
        let pieces = decode(&line, S, R).unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::new(SegmentKind::Static, 1, 1),
                Piece::new(SegmentKind::Dynamic, 2, 3),
                Piece::new(SegmentKind::Static, 5, 1),
            ]
        );
    }

    #[test]
    fn last_two_pixels_same_kind_are_both_counted() {
        let line = [S, S, D, R, R];
        let pieces = decode(&line, S, R).unwrap();
        assert_eq!(
            pieces,
            vec![
                Piece::new(SegmentKind::Static, 1, 2),
                Piece::new(SegmentKind::Dynamic, 3, 1),
                Piece::new(SegmentKind::Repeat, 4, 2),
            ]
        );
        assert_eq!(total_length(&pieces), 5);
    }

    #[test]
    fn last_pixel_alone_is_its_own_piece() {
        let pieces = decode(&[D, D, S], S, R).unwrap();
        assert_eq!(pieces.last(), Some(&Piece::new(SegmentKind::Static, 3, 1)));
        assert_eq!(total_length(&pieces), 3);
    }

    #[test]
    fn uniform_line_is_one_piece() {
        let pieces = decode(&[D; 7], S, R).unwrap();
        assert_eq!(pieces, vec![Piece::new(SegmentKind::Dynamic, 1, 7)]);
    }

    #[test]
    fn single_pixel_line() {
        let pieces = decode(&[R], S, R).unwrap();
        assert_eq!(pieces, vec![Piece::new(SegmentKind::Repeat, 1, 1)]);
    }

    #[test]
    fn degenerate_palette_classifies_static() {
        let pieces = decode(&[S, S], S, S).unwrap();
        assert_eq!(pieces, vec![Piece::new(SegmentKind::Static, 1, 2)]);
    }

    #[test]
    fn empty_line_fails() {
        let err = decode(&[], S, R).unwrap_err();
        assert!(matches!(err, PatchError::InvalidPatchGeometry(_)));
    }

    #[test]
    fn piece_end() {
        assert_eq!(Piece::new(SegmentKind::Dynamic, 2, 3).end(), 5);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_line() -> impl Strategy<Value = Vec<ColorKey>> {
            proptest::collection::vec(prop_oneof![Just(S), Just(R), Just(D)], 1..64)
        }

        proptest! {
            #[test]
            fn pieces_partition_the_line(line in arb_line()) {
                let pieces = decode(&line, S, R).unwrap();
                prop_assert_eq!(total_length(&pieces) as usize, line.len());
                let mut expected_offset = 1;
                for p in &pieces {
                    prop_assert_eq!(p.offset, expected_offset);
                    prop_assert!(p.length >= 1);
                    expected_offset = p.end();
                }
            }

            #[test]
            fn adjacent_pieces_differ_in_kind(line in arb_line()) {
                let pieces = decode(&line, S, R).unwrap();
                for pair in pieces.windows(2) {
                    prop_assert_ne!(pair[0].kind, pair[1].kind);
                }
            }

            #[test]
            fn every_pixel_matches_its_piece(line in arb_line()) {
                let pieces = decode(&line, S, R).unwrap();
                for p in &pieces {
                    for pos in p.offset..p.end() {
                        let kind = SegmentKind::classify(line[pos as usize - 1], S, R);
                        prop_assert_eq!(kind, p.kind);
                    }
                }
            }
        }
    }
}
