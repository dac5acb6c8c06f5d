#![forbid(unsafe_code)]

//! Slider sub-regions.

use vsb_core::geometry::{Rect, Sides};
use vsb_render::canvas::Canvas;
use vsb_render::drawable::Drawable;

/// A geometric sub-object of the slider: the track or the thumb.
///
/// Owns its drawable, its laid-out size, and its paint padding. The owning
/// widget assigns the size during measurement and computes the bounds on
/// demand; padding insets only what gets painted, never the geometry used
/// for hit mapping.
pub struct Region {
    drawable: Box<dyn Drawable>,
    width: i32,
    height: i32,
    padding: Sides,
}

impl Region {
    /// Create a zero-sized region around a drawable.
    #[must_use]
    pub fn new(drawable: Box<dyn Drawable>) -> Self {
        Self {
            drawable,
            width: 0,
            height: 0,
            padding: Sides::default(),
        }
    }

    /// Laid-out width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Laid-out height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Paint padding.
    #[must_use]
    pub const fn padding(&self) -> Sides {
        self.padding
    }

    /// Assign the laid-out size.
    pub(crate) fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Set the paint padding.
    pub fn set_padding(&mut self, padding: Sides) {
        self.padding = padding;
    }

    /// Replace the drawable.
    pub fn set_drawable(&mut self, drawable: Box<dyn Drawable>) {
        self.drawable = drawable;
    }

    /// The rectangle painting actually covers for the given layout bounds.
    #[must_use]
    pub fn painted(&self, bounds: Rect) -> Rect {
        bounds.inset(self.padding)
    }

    /// Position the drawable at the padded bounds and paint it.
    pub(crate) fn draw_into(&mut self, bounds: Rect, canvas: &mut dyn Canvas) {
        self.drawable.set_bounds(self.painted(bounds));
        self.drawable.draw(canvas);
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}
