//! Property tests for progress coercion and touch mapping.

use proptest::prelude::*;
use vsb_core::event::PointerEvent;
use vsb_core::measure::MeasureSpec;
use vsb_widgets::{VerticalSlider, Widget};

proptest! {
    /// After any `set_progress`, progress is inside the configured bounds.
    #[test]
    fn progress_always_within_bounds(
        min in 0i32..1_000,
        span in 1i32..1_000,
        value in i32::MIN..i32::MAX,
    ) {
        let mut slider = VerticalSlider::new();
        slider.set_max_progress(min + span).unwrap();
        slider.set_min_progress(min).unwrap();
        slider.set_progress(value);
        prop_assert!(slider.progress() >= slider.min_progress());
        prop_assert!(slider.progress() <= slider.max_progress());
    }

    /// Any pointer y, however far outside the widget, lands in bounds.
    #[test]
    fn pointer_mapping_always_within_bounds(
        width in 1i32..500,
        extra_height in 1i32..1_000,
        y in -10_000f32..10_000f32,
    ) {
        let mut slider = VerticalSlider::new();
        slider.measure(
            MeasureSpec::exactly(width),
            MeasureSpec::exactly(width + extra_height),
        );
        slider.handle_pointer(PointerEvent::down(0.0, y));
        slider.handle_pointer(PointerEvent::moved(0.0, y));
        prop_assert!(slider.progress() >= slider.min_progress());
        prop_assert!(slider.progress() <= slider.max_progress());
    }

    /// Dragging downward never increases progress (max is at the top).
    #[test]
    fn mapping_is_monotone_decreasing_in_y(
        y1 in 0f32..1_000f32,
        dy in 0f32..1_000f32,
    ) {
        let mut slider = VerticalSlider::new();
        slider.measure(MeasureSpec::exactly(100), MeasureSpec::exactly(1_100));
        slider.handle_pointer(PointerEvent::down(0.0, y1));
        slider.handle_pointer(PointerEvent::moved(0.0, y1));
        let first = slider.progress();
        slider.handle_pointer(PointerEvent::moved(0.0, y1 + dy));
        prop_assert!(slider.progress() <= first);
    }

    /// Setting the same value twice never produces a second notification.
    #[test]
    fn repeated_set_is_idempotent(value in i32::MIN..i32::MAX) {
        let mut slider = VerticalSlider::new();
        slider.set_progress(value);
        let settled = slider.progress();
        prop_assert!(!slider.set_progress(value));
        prop_assert_eq!(slider.progress(), settled);
    }
}
