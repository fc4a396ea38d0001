//! RGBA colors and packed color keys used to classify border pixels.

use serde::Serialize;

/// Packed `r<<24 | g<<16 | b<<8 | a` value.
///
/// Only identity matters: two samples with equal keys are the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorKey(pub u32);

impl ColorKey {
    /// Pack four channel bytes into a key.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    /// Pack an RGBA sample slice (must hold at least 4 bytes).
    pub fn from_slice(px: &[u8]) -> Self {
        Self::from_rgba(px[0], px[1], px[2], px[3])
    }
}

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed identity key for this color.
    pub const fn key(self) -> ColorKey {
        ColorKey::from_rgba(self.r, self.g, self.b, self.a)
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(px: [u8; 4]) -> Self {
        Self::rgba(px[0], px[1], px[2], px[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_packs_channels_in_order() {
        assert_eq!(ColorKey::from_rgba(0x11, 0x22, 0x33, 0x44), ColorKey(0x1122_3344));
        assert_eq!(ColorKey::from_rgba(255, 0, 0, 0), ColorKey(0xFF00_0000));
    }

    #[test]
    fn key_distinguishes_alpha() {
        assert_ne!(Color::rgba(0, 0, 0, 0).key(), Color::rgba(0, 0, 0, 255).key());
    }

    #[test]
    fn key_from_slice_matches_color() {
        let c = Color::rgba(10, 20, 30, 40);
        assert_eq!(ColorKey::from_slice(&c.to_bytes()), c.key());
    }

    #[test]
    fn color_from_bytes() {
        assert_eq!(Color::from([1, 2, 3, 4]), Color::rgba(1, 2, 3, 4));
        assert_eq!(Color::WHITE.to_bytes(), [255, 255, 255, 255]);
    }
}
