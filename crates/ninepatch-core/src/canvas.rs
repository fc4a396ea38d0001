//! Software RGBA drawing surface.
//!
//! Provides the two primitives the compositor needs: a scaled sub-rectangle
//! copy and a pattern fill. All writes replace the destination sample and
//! are clipped to the surface bounds.

use ninepatch_types::PixelBuffer;

/// A drawable RGBA surface that starts fully transparent.
pub struct Canvas {
    target: PixelBuffer,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: PixelBuffer::transparent(width, height),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.target.dimensions()
    }

    fn put(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if x < 0 || y < 0 {
            return;
        }
        // PixelBuffer ignores writes past the right/bottom edge.
        self.target.set_pixel(x as u32, y as u32, px);
    }

    /// Copy the `src_w`x`src_h` region at `(src_x, src_y)` of `src` into the
    /// `dst_w`x`dst_h` region at `(dst_x, dst_y)`, nearest-neighbour scaled.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_sub(
        &mut self,
        src: &PixelBuffer,
        src_x: u32,
        src_y: u32,
        src_w: u32,
        src_h: u32,
        dst_x: i64,
        dst_y: i64,
        dst_w: u32,
        dst_h: u32,
    ) {
        if src_w == 0 || src_h == 0 {
            return;
        }
        let (canvas_w, canvas_h) = self.dimensions();
        for dy in 0..dst_h {
            let ty = dst_y + dy as i64;
            if ty >= canvas_h as i64 {
                break;
            }
            let sy = src_y + (dy as u64 * src_h as u64 / dst_h as u64) as u32;
            for dx in 0..dst_w {
                let tx = dst_x + dx as i64;
                if tx >= canvas_w as i64 {
                    break;
                }
                let sx = src_x + (dx as u64 * src_w as u64 / dst_w as u64) as u32;
                if sx < src.width() && sy < src.height() {
                    self.put(tx, ty, src.pixel(sx, sy));
                }
            }
        }
    }

    /// Fill the `w`x`h` region at `(x, y)` by repeating `tile`, anchored at
    /// the region's top-left corner.
    pub fn fill_pattern(&mut self, tile: &PixelBuffer, x: i64, y: i64, w: u32, h: u32) {
        let (tile_w, tile_h) = tile.dimensions();
        if tile_w == 0 || tile_h == 0 {
            return;
        }
        let (canvas_w, canvas_h) = self.dimensions();
        for dy in 0..h {
            let ty = y + dy as i64;
            if ty >= canvas_h as i64 {
                break;
            }
            for dx in 0..w {
                let tx = x + dx as i64;
                if tx >= canvas_w as i64 {
                    break;
                }
                self.put(tx, ty, tile.pixel(dx % tile_w, dy % tile_h));
            }
        }
    }

    /// Finish drawing and take the raster.
    pub fn into_raster(self) -> PixelBuffer {
        self.target
    }
}
