use crate::geometry::rect::{Point, Size};

/// Map a pointer position in display space to raw screenshot pixel space.
///
/// Landscape screenshots are presented rotated 90 degrees, so the axes are
/// swapped back first (`x' = y`, `y' = display.width - x`). The swapped
/// coordinates live on the rotated axes: the display's height spans the raw
/// image's width and its width spans the raw height, so the landscape scale
/// divides by the opposite display axis. Integer arithmetic throughout,
/// matching how the bounds themselves are expressed.
///
/// Panics if either display dimension is zero; callers must not map clicks
/// before the display has a size.
pub fn map_display_point(p: Point, display: Size, native: Size, is_landscape: bool) -> Point {
    assert!(
        display.width > 0 && display.height > 0,
        "display size must be nonzero before mapping a click"
    );

    if is_landscape {
        Point {
            x: p.y * native.width / display.height,
            y: (display.width - p.x) * native.height / display.width,
        }
    } else {
        Point {
            x: p.x * native.width / display.width,
            y: p.y * native.height / display.height,
        }
    }
}
