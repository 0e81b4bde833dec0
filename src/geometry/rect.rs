/// A rectangle in raw (unrotated) screenshot pixel space.
///
/// Extents are not guaranteed positive: a malformed `bounds` attribute can
/// produce a negative width or height, and such a rectangle simply contains
/// no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A point in pixel space (display space or raw-image space depending on
/// where it came from).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Pixel dimensions of an image or display widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Half-open containment test: `x <= p.x < x+width`, `y <= p.y < y+height`.
    /// A rectangle with non-positive width or height contains nothing.
    pub fn contains(&self, p: Point) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}
