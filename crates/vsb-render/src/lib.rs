#![forbid(unsafe_code)]

//! Render contracts for the vertical seek bar toolkit.
//!
//! Widgets never touch pixels. They compute bounds, hand them to a
//! [`drawable::Drawable`], and the drawable paints itself through the
//! [`canvas::Canvas`] the host supplies. [`canvas::RecordingCanvas`] is a
//! software canvas that logs paint operations for tests and demos.

pub mod canvas;
pub mod color;
pub mod drawable;

pub use canvas::{Canvas, PaintOp, RecordingCanvas};
pub use color::Rgba;
pub use drawable::{Drawable, SolidOval, SolidRect};
