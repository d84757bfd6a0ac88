use serde::{Deserialize, Serialize};

/// A rectangle representing a window's position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns whether the point lies inside the rectangle.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns whether the two rectangles share any pixels.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrinks the rectangle by the given edge widths.
    ///
    /// The result may be empty when the insets exceed the size.
    pub fn inset(&self, insets: &Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.left - insets.right,
            self.height - insets.top - insets.bottom,
        )
    }

    /// Compares two rectangles edge by edge within a pixel tolerance.
    ///
    /// Window placement is verified with this rather than equality:
    /// some applications land a pixel off the requested size and never
    /// converge further.
    pub fn approx_eq(&self, other: &Rect, tolerance: i32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.right() - other.right()).abs() <= tolerance
            && (self.bottom() - other.bottom()).abs() <= tolerance
    }
}

/// Per-edge widths in pixels, used for overlay padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub fn uniform(n: i32) -> Self {
        Self {
            left: n,
            top: n,
            right: n,
            bottom: n,
        }
    }
}

/// Clips `inner` out of `outer` and returns the remaining border shape
/// as up to four non-overlapping strips (top, bottom, left, right).
///
/// The strips tile `outer` minus `inner` exactly. An `inner` reaching
/// outside `outer` is clamped first; an empty hole yields the whole
/// `outer`; a hole covering `outer` yields nothing.
pub fn frame_strips(outer: &Rect, inner: &Rect) -> Vec<Rect> {
    if outer.is_empty() {
        return Vec::new();
    }

    let hole = clamp_hole(outer, inner);
    if hole.is_empty() {
        return vec![*outer];
    }

    let mut strips = Vec::with_capacity(4);

    // Top and bottom strips span the full outer width; left and right
    // fill the remaining middle band. This assignment is arbitrary but
    // must stay consistent so the strips never overlap.
    if hole.y > outer.y {
        strips.push(Rect::new(outer.x, outer.y, outer.width, hole.y - outer.y));
    }
    if hole.bottom() < outer.bottom() {
        strips.push(Rect::new(
            outer.x,
            hole.bottom(),
            outer.width,
            outer.bottom() - hole.bottom(),
        ));
    }
    if hole.x > outer.x {
        strips.push(Rect::new(outer.x, hole.y, hole.x - outer.x, hole.height));
    }
    if hole.right() < outer.right() {
        strips.push(Rect::new(
            hole.right(),
            hole.y,
            outer.right() - hole.right(),
            hole.height,
        ));
    }

    strips
}

/// Clamps the hole rectangle to the outer bounds.
fn clamp_hole(outer: &Rect, inner: &Rect) -> Rect {
    let x = inner.x.clamp(outer.x, outer.right());
    let y = inner.y.clamp(outer.y, outer.bottom());
    let right = inner.right().clamp(x, outer.right());
    let bottom = inner.bottom().clamp(y, outer.bottom());
    Rect::new(x, y, right - x, bottom - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(rects: &[Rect]) -> i64 {
        rects
            .iter()
            .map(|r| i64::from(r.width) * i64::from(r.height))
            .sum()
    }

    #[test]
    fn inset_shrinks_every_edge() {
        // Arrange
        let rect = Rect::new(100, 100, 800, 600);

        // Act
        let inner = rect.inset(&Insets::uniform(24));

        // Assert
        assert_eq!(inner, Rect::new(124, 124, 752, 552));
    }

    #[test]
    fn inset_past_half_size_is_empty() {
        // Arrange
        let rect = Rect::new(0, 0, 40, 40);

        // Act
        let inner = rect.inset(&Insets::uniform(25));

        // Assert
        assert!(inner.is_empty());
    }

    #[test]
    fn approx_eq_within_tolerance() {
        // Arrange
        let target = Rect::new(0, 0, 800, 600);
        let off_by_one = Rect::new(1, 0, 800, 599);
        let off_by_two = Rect::new(0, 0, 802, 600);

        // Act / Assert
        assert!(target.approx_eq(&off_by_one, 1));
        assert!(!target.approx_eq(&off_by_two, 1));
        assert!(target.approx_eq(&off_by_two, 2));
    }

    #[test]
    fn frame_strips_tile_the_border_exactly() {
        // Arrange
        let outer = Rect::new(0, 0, 100, 80);
        let inner = Rect::new(10, 12, 70, 50);

        // Act
        let strips = frame_strips(&outer, &inner);

        // Assert: total area equals outer minus inner
        assert_eq!(strips.len(), 4);
        assert_eq!(area(&strips), 100 * 80 - 70 * 50);

        // Assert: no strip overlaps another or the hole
        for (i, a) in strips.iter().enumerate() {
            assert!(!a.intersects(&inner), "strip {a:?} overlaps the hole");
            for b in &strips[i + 1..] {
                assert!(!a.intersects(b), "strips {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn frame_strips_membership_matches_point_test() {
        // Arrange
        let outer = Rect::new(0, 0, 30, 20);
        let inner = Rect::new(5, 4, 18, 10);

        // Act
        let strips = frame_strips(&outer, &inner);

        // Assert: every outer pixel is in a strip iff it is outside the hole
        for y in outer.y..outer.bottom() {
            for x in outer.x..outer.right() {
                let in_strip = strips.iter().any(|s| s.contains_point(x, y));
                let in_hole = inner.contains_point(x, y);
                assert_eq!(in_strip, !in_hole, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn hole_outside_outer_is_clamped() {
        // Arrange
        let outer = Rect::new(0, 0, 50, 50);
        let inner = Rect::new(-10, 20, 100, 10);

        // Act
        let strips = frame_strips(&outer, &inner);

        // Assert: full-width hole band leaves top and bottom strips
        assert_eq!(strips.len(), 2);
        assert_eq!(area(&strips), 50 * 50 - 50 * 10);
    }

    #[test]
    fn empty_hole_yields_whole_outer() {
        // Arrange
        let outer = Rect::new(10, 10, 40, 40);
        let inner = Rect::new(20, 20, 0, 0);

        // Act
        let strips = frame_strips(&outer, &inner);

        // Assert
        assert_eq!(strips, vec![outer]);
    }

    #[test]
    fn hole_covering_outer_yields_nothing() {
        // Arrange
        let outer = Rect::new(0, 0, 40, 40);
        let inner = Rect::new(-5, -5, 50, 50);

        // Act / Assert
        assert!(frame_strips(&outer, &inner).is_empty());
    }

    #[test]
    fn empty_outer_yields_nothing() {
        // Act / Assert
        assert!(frame_strips(&Rect::new(0, 0, 0, 10), &Rect::new(0, 0, 5, 5)).is_empty());
    }
}
