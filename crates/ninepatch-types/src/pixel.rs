//! Immutable RGBA8 pixel grid.

use crate::color::{Color, ColorKey};
use crate::error::{PatchError, Result};

/// A rectangular grid of RGBA8 samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes. The length must be `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PatchError::geometry(format!(
                "pixel data is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// A buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let data = color
            .to_bytes()
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// RGBA sample at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let o = self.offset(x, y);
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    pub fn color(&self, x: u32, y: u32) -> Color {
        Color::from(self.pixel(x, y))
    }

    pub fn key(&self, x: u32, y: u32) -> ColorKey {
        ColorKey::from_slice(&self.pixel(x, y))
    }

    /// Overwrite the sample at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let o = self.offset(x, y);
        self.data[o..o + 4].copy_from_slice(&px);
    }

    /// Color keys of row `y`, left to right.
    pub fn row_keys(&self, y: u32) -> Vec<ColorKey> {
        (0..self.width).map(|x| self.key(x, y)).collect()
    }

    /// Color keys of column `x`, top to bottom.
    pub fn column_keys(&self, x: u32) -> Vec<ColorKey> {
        (0..self.height).map(|y| self.key(x, y)).collect()
    }

    /// Copy the `w`x`h` region at `(x, y)` into a new buffer.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if x.saturating_add(w) > self.width || y.saturating_add(h) > self.height {
            return Err(PatchError::geometry(format!(
                "crop {w}x{h}+{x}+{y} outside {}x{}",
                self.width, self.height
            )));
        }
        let mut data = Vec::with_capacity(w as usize * h as usize * 4);
        for row in y..y + h {
            let start = self.offset(x, row);
            data.extend_from_slice(&self.data[start..start + w as usize * 4]);
        }
        Ok(Self {
            width: w,
            height: h,
            data,
        })
    }
}
