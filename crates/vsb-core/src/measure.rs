#![forbid(unsafe_code)]

//! The measurement protocol.
//!
//! The layout engine proposes a size for each axis, tagged with a resolution
//! mode; the widget answers with a concrete size. [`resolve_default_size`]
//! implements the host's default policy for widgets without intrinsic
//! content: take the proposal when there is one, otherwise fall back to the
//! widget's minimum-size hint.

/// How a proposed size constrains the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The widget must be exactly the proposed size.
    Exact,

    /// The widget may be any size up to the proposed size.
    AtMost,

    /// The parent imposes no constraint on this axis.
    Unspecified,
}

/// A size proposal for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    /// The resolution mode.
    pub mode: MeasureMode,

    /// The proposed size in pixels. Meaningless for [`MeasureMode::Unspecified`].
    pub size: i32,
}

impl MeasureSpec {
    /// Create a spec requiring exactly `size` pixels.
    #[must_use]
    pub const fn exactly(size: i32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// Create a spec allowing at most `size` pixels.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// Create an unconstrained spec.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }
}

/// Resolve a concrete axis size from a minimum-size hint and a spec.
///
/// `Exact` and `AtMost` both resolve to the proposed size; only
/// `Unspecified` falls back to the hint.
#[must_use]
pub const fn resolve_default_size(min_hint: i32, spec: MeasureSpec) -> i32 {
    match spec.mode {
        MeasureMode::Unspecified => min_hint,
        MeasureMode::Exact | MeasureMode::AtMost => spec.size,
    }
}

#[cfg(test)]
mod tests {
    use super::{MeasureMode, MeasureSpec, resolve_default_size};

    #[test]
    fn constructors_set_mode() {
        assert_eq!(MeasureSpec::exactly(300).mode, MeasureMode::Exact);
        assert_eq!(MeasureSpec::at_most(300).mode, MeasureMode::AtMost);
        assert_eq!(
            MeasureSpec::unspecified().mode,
            MeasureMode::Unspecified
        );
    }

    #[test]
    fn exact_resolves_to_proposal() {
        assert_eq!(resolve_default_size(10, MeasureSpec::exactly(300)), 300);
    }

    #[test]
    fn at_most_resolves_to_proposal() {
        assert_eq!(resolve_default_size(10, MeasureSpec::at_most(250)), 250);
    }

    #[test]
    fn unspecified_resolves_to_hint() {
        assert_eq!(resolve_default_size(48, MeasureSpec::unspecified()), 48);
    }

    #[test]
    fn zero_hint_with_unspecified_is_zero() {
        assert_eq!(resolve_default_size(0, MeasureSpec::unspecified()), 0);
    }
}
