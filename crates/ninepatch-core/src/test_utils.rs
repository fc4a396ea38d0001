//! Shared test utilities: a builder for synthetic patch images.

use std::ops::Range;

use ninepatch_types::{Color, PixelBuffer};

/// Stretch and padding marker color.
pub const MARKER: Color = Color::BLACK;
/// Repeat sentinel, placed in the top-right corner when repeat markers exist.
pub const REPEAT: Color = Color::rgb(255, 0, 0);

/// Builds a patch image around a `width`x`height` interior.
///
/// The 1px border is transparent, so the top-left corner (the static
/// sentinel) is transparent too. Ranges are interior positions, 1-based,
/// which coincide with image coordinates.
pub struct PatchBuilder {
    image: PixelBuffer,
    uses_repeat: bool,
}

impl PatchBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        let mut image = PixelBuffer::transparent(width + 2, height + 2);
        for y in 1..=height {
            for x in 1..=width {
                image.set_pixel(x, y, [x as u8 * 20, y as u8 * 20, 128, 255]);
            }
        }
        Self {
            image,
            uses_repeat: false,
        }
    }

    fn top(mut self, range: Range<u32>, color: Color) -> Self {
        for x in range {
            self.image.set_pixel(x, 0, color.to_bytes());
        }
        self
    }

    fn left(mut self, range: Range<u32>, color: Color) -> Self {
        for y in range {
            self.image.set_pixel(0, y, color.to_bytes());
        }
        self
    }

    pub fn stretch_x(self, range: Range<u32>) -> Self {
        self.top(range, MARKER)
    }

    pub fn stretch_y(self, range: Range<u32>) -> Self {
        self.left(range, MARKER)
    }

    pub fn repeat_x(mut self, range: Range<u32>) -> Self {
        self.uses_repeat = true;
        self.top(range, REPEAT)
    }

    pub fn repeat_y(mut self, range: Range<u32>) -> Self {
        self.uses_repeat = true;
        self.left(range, REPEAT)
    }

    /// Horizontal padding marker on the bottom row.
    pub fn pad_x(mut self, range: Range<u32>) -> Self {
        let y = self.image.height() - 1;
        for x in range {
            self.image.set_pixel(x, y, MARKER.to_bytes());
        }
        self
    }

    /// Vertical padding marker on the right column.
    pub fn pad_y(mut self, range: Range<u32>) -> Self {
        let x = self.image.width() - 1;
        for y in range {
            self.image.set_pixel(x, y, MARKER.to_bytes());
        }
        self
    }

    pub fn build(mut self) -> PixelBuffer {
        if self.uses_repeat {
            let x = self.image.width() - 1;
            self.image.set_pixel(x, 0, REPEAT.to_bytes());
        }
        self.image
    }
}
