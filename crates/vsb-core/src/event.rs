#![forbid(unsafe_code)]

//! Canonical pointer input types.
//!
//! The host input system delivers pointer events with a phase and a
//! position; widgets report back whether they consumed the event. Positions
//! are fractional pixels (touch hardware reports sub-pixel coordinates).

use bitflags::bitflags;

/// The phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer made contact.
    Down,

    /// Pointer moved while in contact.
    Move,

    /// Pointer lifted.
    Up,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The gesture phase.
    pub phase: PointerPhase,

    /// X coordinate in pixels, relative to the widget's left edge.
    pub x: f32,

    /// Y coordinate in pixels, relative to the widget's top edge.
    pub y: f32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a pointer-down event.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    /// Create a pointer-move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// Create a pointer-up event.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
