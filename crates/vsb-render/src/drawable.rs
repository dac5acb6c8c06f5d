#![forbid(unsafe_code)]

//! The drawable contract and stock shapes.
//!
//! A drawable is an opaque paintable handle: the owner positions it with
//! [`Drawable::set_bounds`] and asks it to paint itself with
//! [`Drawable::draw`]. The two stock shapes cover the slider's defaults: a
//! flat rectangle for the track and a filled disc for the thumb.

use crate::canvas::Canvas;
use crate::color::Rgba;
use vsb_core::geometry::Rect;

/// An opaque paintable handle with mutable bounds.
pub trait Drawable {
    /// Set the bounds the next [`draw`](Self::draw) call paints into.
    fn set_bounds(&mut self, bounds: Rect);

    /// The current bounds.
    fn bounds(&self) -> Rect;

    /// Paint into the current bounds.
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// A flat single-color rectangle.
#[derive(Debug, Clone, Copy)]
pub struct SolidRect {
    color: Rgba,
    bounds: Rect,
}

impl SolidRect {
    /// Create a rectangle drawable with the given fill color.
    #[must_use]
    pub const fn new(color: Rgba) -> Self {
        Self {
            color,
            bounds: Rect::new(0, 0, 0, 0),
        }
    }

    /// The fill color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }
}

impl Drawable for SolidRect {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.color);
    }
}

/// A filled disc inscribed in its bounds.
#[derive(Debug, Clone, Copy)]
pub struct SolidOval {
    color: Rgba,
    bounds: Rect,
}

impl SolidOval {
    /// Create an oval drawable with the given fill color.
    #[must_use]
    pub const fn new(color: Rgba) -> Self {
        Self {
            color,
            bounds: Rect::new(0, 0, 0, 0),
        }
    }

    /// The fill color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }
}

impl Drawable for SolidOval {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_oval(self.bounds, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::{Drawable, SolidOval, SolidRect};
    use crate::canvas::{PaintOp, RecordingCanvas};
    use crate::color::Rgba;
    use vsb_core::geometry::Rect;

    #[test]
    fn solid_rect_paints_its_bounds() {
        let mut rect = SolidRect::new(Rgba::argb(0x22, 0, 0, 0));
        rect.set_bounds(Rect::new(0, 100, 300, 200));

        let mut canvas = RecordingCanvas::new();
        rect.draw(&mut canvas);

        assert_eq!(
            canvas.ops(),
            &[PaintOp::Rect {
                bounds: Rect::new(0, 100, 300, 200),
                color: Rgba::argb(0x22, 0, 0, 0),
            }]
        );
    }

    #[test]
    fn solid_oval_paints_its_bounds() {
        let mut oval = SolidOval::new(Rgba::BLACK);
        oval.set_bounds(Rect::new(0, 50, 300, 350));

        let mut canvas = RecordingCanvas::new();
        oval.draw(&mut canvas);

        assert_eq!(
            canvas.ops(),
            &[PaintOp::Oval {
                bounds: Rect::new(0, 50, 300, 350),
                color: Rgba::BLACK,
            }]
        );
    }

    #[test]
    fn bounds_default_to_empty() {
        let rect = SolidRect::new(Rgba::BLACK);
        assert!(rect.bounds().is_empty());
    }

    #[test]
    fn set_bounds_overwrites() {
        let mut rect = SolidRect::new(Rgba::BLACK);
        rect.set_bounds(Rect::from_size(10, 10));
        rect.set_bounds(Rect::from_size(20, 20));
        assert_eq!(rect.bounds(), Rect::from_size(20, 20));
    }
}
