#![forbid(unsafe_code)]

//! Widgets for the vertical seek bar toolkit.

pub mod listener;
pub mod region;
pub mod slider;

pub use listener::ChangeListener;
pub use region::Region;
pub use slider::{SliderAttrs, SliderError, TouchProfile, VerticalSlider};

use vsb_core::event::PointerEvent;
use vsb_core::geometry::Size;
use vsb_core::measure::MeasureSpec;
use vsb_render::canvas::Canvas;

/// A `Widget` is a measurable, paintable, pointer-aware component.
///
/// The host drives it through three entry points: the layout engine calls
/// [`measure`](Widget::measure), the renderer calls [`draw`](Widget::draw)
/// with a paint target, and the input system calls
/// [`handle_pointer`](Widget::handle_pointer), which reports whether the
/// event was consumed.
pub trait Widget {
    /// Resolve a concrete size from the host's per-axis proposals.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size;

    /// Paint into the given canvas using the last measured geometry.
    fn draw(&mut self, canvas: &mut dyn Canvas);

    /// Process a pointer event; `true` means consumed.
    fn handle_pointer(&mut self, event: PointerEvent) -> bool;
}
