#![forbid(unsafe_code)]

//! The paint-target contract.
//!
//! A [`Canvas`] is the surface the host hands a widget on each draw request.
//! Drawables issue fill operations against it; how those become pixels is
//! the renderer's business, not the widget's.

use crate::color::Rgba;
use vsb_core::geometry::Rect;

/// A surface that accepts fill operations.
pub trait Canvas {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, bounds: Rect, color: Rgba);

    /// Fill the oval inscribed in `bounds`.
    fn fill_oval(&mut self, bounds: Rect, color: Rgba);
}

/// A single recorded paint operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    /// A `fill_rect` call.
    Rect { bounds: Rect, color: Rgba },

    /// A `fill_oval` call.
    Oval { bounds: Rect, color: Rgba },
}

impl PaintOp {
    /// The bounds of the operation, whatever its shape.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } | Self::Oval { bounds, .. } => *bounds,
        }
    }

    /// The color of the operation.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Rect { color, .. } | Self::Oval { color, .. } => *color,
        }
    }
}

/// A software canvas that records every operation in order.
///
/// Tests and the demo binary draw into one of these and assert on (or print)
/// the op log instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<PaintOp>,
}

impl RecordingCanvas {
    /// Create an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations recorded so far, in paint order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Discard all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, bounds: Rect, color: Rgba) {
        self.ops.push(PaintOp::Rect { bounds, color });
    }

    fn fill_oval(&mut self, bounds: Rect, color: Rgba) {
        self.ops.push(PaintOp::Oval { bounds, color });
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, PaintOp, RecordingCanvas};
    use crate::color::Rgba;
    use vsb_core::geometry::Rect;

    #[test]
    fn records_ops_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::from_size(10, 10), Rgba::BLACK);
        canvas.fill_oval(Rect::new(0, 5, 10, 15), Rgba::WHITE);

        assert_eq!(canvas.ops().len(), 2);
        assert!(matches!(canvas.ops()[0], PaintOp::Rect { .. }));
        assert!(matches!(canvas.ops()[1], PaintOp::Oval { .. }));
    }

    #[test]
    fn op_accessors() {
        let op = PaintOp::Oval {
            bounds: Rect::new(1, 2, 3, 4),
            color: Rgba::WHITE,
        };
        assert_eq!(op.bounds(), Rect::new(1, 2, 3, 4));
        assert_eq!(op.color(), Rgba::WHITE);
    }

    #[test]
    fn clear_discards_ops() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::from_size(1, 1), Rgba::BLACK);
        canvas.clear();
        assert!(canvas.ops().is_empty());
    }
}
