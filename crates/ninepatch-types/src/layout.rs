//! Content insets: per-axis padding and the four-sided combination.

use serde::Serialize;

/// Padding along one axis, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Padding {
    /// Inset at the start of the axis (top or left).
    pub begin: u32,
    /// Inset at the end of the axis (bottom or right).
    pub end: u32,
}

impl Padding {
    pub const fn new(begin: u32, end: u32) -> Self {
        Self { begin, end }
    }
}

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combine the vertical (top/bottom) and horizontal (left/right) paddings.
    pub const fn from_axes(vertical: Padding, horizontal: Padding) -> Self {
        Self {
            top: vertical.begin,
            right: horizontal.end,
            bottom: vertical.end,
            left: horizontal.begin,
        }
    }

    /// Total horizontal padding (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Outer size of a box whose content area is `w`x`h`.
    pub fn outer_size(&self, w: u32, h: u32) -> (u32, u32) {
        (
            w.saturating_add(self.horizontal()),
            h.saturating_add(self.vertical()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_axes_maps_sides() {
        let i = Insets::from_axes(Padding::new(1, 2), Padding::new(3, 4));
        assert_eq!(i, Insets::new(1, 4, 2, 3));
    }

    #[test]
    fn totals() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.horizontal(), 6);
        assert_eq!(i.vertical(), 4);
    }

    #[test]
    fn outer_size_adds_insets() {
        let i = Insets::new(2, 3, 4, 5);
        assert_eq!(i.outer_size(100, 50), (108, 56));
        assert_eq!(Insets::ZERO.outer_size(7, 9), (7, 9));
    }
}
