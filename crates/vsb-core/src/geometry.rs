#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are in device pixels, signed so that intermediate layout math
//! (offsets, deltas, underflowing subtractions) stays representable.
//! Origin is top-left, y grows downward.

/// A rectangle for layout bounds, paint bounds, and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in pixels. Negative if the rectangle is inverted.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels. Negative if the rectangle is inverted.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Create a new rectangle inside the current one with the given inset.
    ///
    /// Each edge moves inward by the matching side; collapses to an empty
    /// rectangle rather than inverting when the inset is too large.
    pub fn inset(&self, sides: Sides) -> Rect {
        let left = self.left + sides.left;
        let top = self.top + sides.top;
        let right = (self.right - sides.right).max(left);
        let bottom = (self.bottom - sides.bottom).max(top);
        Rect::new(left, top, right, bottom)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Per-side insets for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: i32) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: i32) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top + self.bottom
    }
}

impl From<i32> for Sides {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

impl From<(i32, i32)> for Sides {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(i32, i32, i32, i32)> for Sides {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};

    // --- Rect constructors and accessors ---

    #[test]
    fn rect_new_edges() {
        let r = Rect::new(2, 3, 6, 8);
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 5);
    }

    #[test]
    fn rect_from_size_at_origin() {
        let r = Rect::from_size(300, 400);
        assert_eq!(r.left, 0);
        assert_eq!(r.top, 0);
        assert_eq!(r.right, 300);
        assert_eq!(r.bottom, 400);
    }

    #[test]
    fn rect_default_is_empty() {
        assert!(Rect::default().is_empty());
    }

    // --- Contains ---

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(2, 3, 6, 8);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
    }

    #[test]
    fn rect_contains_negative_coordinates() {
        let r = Rect::new(-4, -4, 4, 4);
        assert!(r.contains(-4, -4));
        assert!(r.contains(0, 0));
        assert!(!r.contains(4, 0));
    }

    // --- is_empty ---

    #[test]
    fn rect_inverted_is_empty() {
        assert!(Rect::new(5, 0, 3, 10).is_empty());
        assert!(Rect::new(0, 10, 10, 5).is_empty());
    }

    #[test]
    fn rect_positive_area_not_empty() {
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    // --- Inset ---

    #[test]
    fn rect_inset_moves_edges_inward() {
        let r = Rect::new(0, 0, 20, 20);
        let inner = r.inset(Sides::new(2, 3, 4, 5));
        assert_eq!(inner, Rect::new(5, 2, 17, 16));
    }

    #[test]
    fn rect_inset_zero_is_identity() {
        let r = Rect::new(1, 2, 30, 40);
        assert_eq!(r.inset(Sides::all(0)), r);
    }

    #[test]
    fn rect_inset_oversized_collapses_to_empty() {
        let r = Rect::new(0, 0, 10, 10);
        let inner = r.inset(Sides::all(20));
        assert!(inner.is_empty());
        // No inversion: width/height clamp at zero.
        assert_eq!(inner.width(), 0);
        assert_eq!(inner.height(), 0);
    }

    // --- Sides ---

    #[test]
    fn sides_constructors_and_conversions() {
        assert_eq!(Sides::all(3), Sides::from(3));
        assert_eq!(Sides::horizontal(2), Sides::new(0, 2, 0, 2));
        assert_eq!(Sides::vertical(4), Sides::new(4, 0, 4, 0));
        assert_eq!(Sides::from((1, 2)), Sides::new(1, 2, 1, 2));
        assert_eq!(Sides::from((1, 2, 3, 4)), Sides::new(1, 2, 3, 4));
    }

    #[test]
    fn sides_sums() {
        let sides = Sides::new(1, 2, 3, 4);
        assert_eq!(sides.horizontal_sum(), 6);
        assert_eq!(sides.vertical_sum(), 4);
    }

    #[test]
    fn sides_default_is_zero() {
        assert_eq!(Sides::default(), Sides::all(0));
    }

    // --- Size ---

    #[test]
    fn size_new() {
        let s = Size::new(300, 400);
        assert_eq!(s.width, 300);
        assert_eq!(s.height, 400);
    }

    // --- Properties ---

    proptest::proptest! {
        #[test]
        fn inset_never_inverts(
            w in 0i32..10_000,
            h in 0i32..10_000,
            pad in 0i32..20_000,
        ) {
            let inner = Rect::from_size(w, h).inset(Sides::all(pad));
            proptest::prop_assert!(inner.width() >= 0);
            proptest::prop_assert!(inner.height() >= 0);
        }

        #[test]
        fn inset_stays_inside(
            w in 1i32..10_000,
            h in 1i32..10_000,
            pad in 0i32..100,
        ) {
            let outer = Rect::from_size(w, h);
            let inner = outer.inset(Sides::all(pad));
            proptest::prop_assert!(inner.left >= outer.left);
            proptest::prop_assert!(inner.top >= outer.top);
            proptest::prop_assert!(inner.right <= outer.right);
            proptest::prop_assert!(inner.bottom <= outer.bottom);
        }
    }
}
