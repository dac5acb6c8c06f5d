#![forbid(unsafe_code)]

//! The progress change listener contract.
//!
//! One polymorphic listener covers both host styles: a full 4-method
//! observer with a veto hook and drag-tracking notifications, and a bare
//! closure that only wants committed values (via the blanket `FnMut(i32)`
//! impl, which leaves the veto and tracking hooks at their defaults).

/// Observer for slider progress changes and drag lifecycle.
///
/// Call order for a committed change is fixed:
/// [`pre_progress_change`](Self::pre_progress_change) (may veto), then the
/// commit, then [`on_progress_change`](Self::on_progress_change).
/// The tracking hooks bracket a drag gesture and never fire for
/// programmatic changes.
pub trait ChangeListener {
    /// Called with the coerced value before it commits.
    ///
    /// Return `false` to veto: the value is not updated and
    /// `on_progress_change` does not fire.
    fn pre_progress_change(&mut self, _next: i32) -> bool {
        true
    }

    /// Called with the new progress after every committed change.
    fn on_progress_change(&mut self, progress: i32);

    /// Called once when a drag gesture begins.
    fn on_start_tracking_touch(&mut self) {}

    /// Called once when a drag gesture ends.
    fn on_stop_tracking_touch(&mut self) {}
}

impl<F: FnMut(i32)> ChangeListener for F {
    fn on_progress_change(&mut self, progress: i32) {
        self(progress);
    }
}
