#![forbid(unsafe_code)]

//! Vertical slider (seek bar) widget.
//!
//! A single-thumb progress control laid out vertically, with progress
//! increasing upward: the thumb sits at the top at `max_progress` and at the
//! bottom at `min_progress`. The thumb is square, as wide as the widget;
//! the track takes the remaining height and is centered vertically so half
//! a thumb of travel margin remains above and below it.

use crate::Widget;
use crate::listener::ChangeListener;
use crate::region::Region;
use vsb_core::event::{PointerEvent, PointerPhase};
use vsb_core::geometry::{Rect, Sides, Size};
use vsb_core::measure::{MeasureSpec, resolve_default_size};
use vsb_render::canvas::Canvas;
use vsb_render::color::Rgba;
use vsb_render::drawable::{Drawable, SolidOval, SolidRect};

/// Default track paint: translucent black.
const DEFAULT_TRACK_COLOR: Rgba = Rgba(0x2200_0000);
/// Default thumb paint: opaque black.
const DEFAULT_THUMB_COLOR: Rgba = Rgba(0xFF00_0000);

/// Errors from the progress-bound setters.
///
/// Both are rejected-assignment errors: the property keeps its previous
/// value and no notification or redraw request is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderError {
    /// `min_progress` must be `>= 0`.
    NegativeMin(i32),

    /// `max_progress` must be `> min_progress`.
    MaxNotAboveMin { max: i32, min: i32 },
}

impl std::fmt::Display for SliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeMin(value) => {
                write!(f, "min_progress must be >= 0, got {value}")
            }
            Self::MaxNotAboveMin { max, min } => {
                write!(f, "max_progress ({max}) must be > min_progress ({min})")
            }
        }
    }
}

impl std::error::Error for SliderError {}

/// How pointer events drive the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchProfile {
    /// Full drag controller: down starts tracking, moves update progress,
    /// up stops tracking. The tracking hooks fire once per gesture.
    #[default]
    Tracked,

    /// Minimal behavior: every pointer event, whatever its phase, maps the
    /// y coordinate straight to progress. No tracking notifications.
    Direct,
}

/// Drag interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Construction-time configuration, the style-attribute analog.
///
/// Every field is optional with the stated default: `min` 0, `max` 100,
/// `progress` = `min`, a translucent flat rectangle for the track, an opaque
/// disc for the thumb, and zero padding everywhere.
pub struct SliderAttrs {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub progress: Option<i32>,
    pub track: Option<Box<dyn Drawable>>,
    pub thumb: Option<Box<dyn Drawable>>,
    pub track_padding_left: i32,
    pub track_padding_right: i32,
    pub thumb_padding: Sides,
}

impl Default for SliderAttrs {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            progress: None,
            track: None,
            thumb: None,
            track_padding_left: 0,
            track_padding_right: 0,
            thumb_padding: Sides::default(),
        }
    }
}

impl std::fmt::Debug for SliderAttrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderAttrs")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("progress", &self.progress)
            .field("track_padding_left", &self.track_padding_left)
            .field("track_padding_right", &self.track_padding_right)
            .field("thumb_padding", &self.thumb_padding)
            .finish_non_exhaustive()
    }
}

/// A vertical single-thumb seek bar.
pub struct VerticalSlider {
    min_progress: i32,
    max_progress: i32,
    progress: i32,
    listener: Option<Box<dyn ChangeListener>>,
    track: Region,
    thumb: Region,
    profile: TouchProfile,
    drag: DragState,
    width: i32,
    height: i32,
    min_width_hint: i32,
    min_height_hint: i32,
    needs_redraw: bool,
}

impl std::fmt::Debug for VerticalSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerticalSlider")
            .field("min_progress", &self.min_progress)
            .field("max_progress", &self.max_progress)
            .field("progress", &self.progress)
            .field("track", &self.track)
            .field("thumb", &self.thumb)
            .field("profile", &self.profile)
            .field("drag", &self.drag)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("min_width_hint", &self.min_width_hint)
            .field("min_height_hint", &self.min_height_hint)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

impl VerticalSlider {
    /// Create a slider with default attributes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_progress: 0,
            max_progress: 100,
            progress: 0,
            listener: None,
            track: Region::new(Box::new(SolidRect::new(DEFAULT_TRACK_COLOR))),
            thumb: Region::new(Box::new(SolidOval::new(DEFAULT_THUMB_COLOR))),
            profile: TouchProfile::default(),
            drag: DragState::default(),
            width: 0,
            height: 0,
            min_width_hint: 0,
            min_height_hint: 0,
            needs_redraw: false,
        }
    }

    /// Create a slider from host-supplied attributes.
    ///
    /// Attributes apply through the regular setters in declaration order
    /// (min, max, progress, drawables, padding), so bound validation and
    /// progress coercion behave exactly as they do after construction.
    pub fn with_attrs(attrs: SliderAttrs) -> Result<Self, SliderError> {
        let mut slider = Self::new();
        if let Some(min) = attrs.min {
            slider.set_min_progress(min)?;
        }
        if let Some(max) = attrs.max {
            slider.set_max_progress(max)?;
        }
        slider.set_progress(attrs.progress.unwrap_or(slider.min_progress));
        if let Some(track) = attrs.track {
            slider.track.set_drawable(track);
        }
        if let Some(thumb) = attrs.thumb {
            slider.thumb.set_drawable(thumb);
        }
        slider.set_track_padding(attrs.track_padding_left, attrs.track_padding_right);
        slider.set_thumb_padding(attrs.thumb_padding);
        slider.needs_redraw = false;
        Ok(slider)
    }

    // --- Progress state machine ---

    /// Current progress, always within `[min_progress, max_progress]`.
    #[must_use]
    pub const fn progress(&self) -> i32 {
        self.progress
    }

    /// Lower progress bound.
    #[must_use]
    pub const fn min_progress(&self) -> i32 {
        self.min_progress
    }

    /// Upper progress bound.
    #[must_use]
    pub const fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Set the progress, coercing into the current bounds.
    ///
    /// Returns whether a change committed. Equal-after-coercion values are
    /// a silent no-op; the listener may veto the change before it commits.
    /// A committed change notifies the listener and requests a redraw.
    pub fn set_progress(&mut self, value: i32) -> bool {
        // Not `clamp`: the min setter does not validate against max, so the
        // bounds can be transiently inverted and `clamp` would panic.
        let coerced = value.max(self.min_progress).min(self.max_progress);
        if coerced == self.progress {
            return false;
        }
        if let Some(listener) = self.listener.as_mut()
            && !listener.pre_progress_change(coerced)
        {
            return false;
        }
        self.progress = coerced;
        #[cfg(feature = "tracing")]
        tracing::trace!(progress = coerced, "progress committed");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_change(coerced);
        }
        self.request_redraw();
        true
    }

    /// Set the lower bound. Fails on negative values, leaving state untouched.
    ///
    /// A successful change re-coerces the current progress into the new
    /// range through [`set_progress`](Self::set_progress), so the listener
    /// observes any resulting shift like an ordinary change.
    pub fn set_min_progress(&mut self, value: i32) -> Result<(), SliderError> {
        if value < 0 {
            return Err(SliderError::NegativeMin(value));
        }
        if value == self.min_progress {
            return Ok(());
        }
        self.min_progress = value;
        self.request_redraw();
        self.set_progress(self.progress);
        Ok(())
    }

    /// Set the upper bound. Fails unless strictly above the lower bound,
    /// leaving state untouched. Re-coerces like
    /// [`set_min_progress`](Self::set_min_progress).
    pub fn set_max_progress(&mut self, value: i32) -> Result<(), SliderError> {
        if value <= self.min_progress {
            return Err(SliderError::MaxNotAboveMin {
                max: value,
                min: self.min_progress,
            });
        }
        if value == self.max_progress {
            return Ok(());
        }
        self.max_progress = value;
        self.request_redraw();
        self.set_progress(self.progress);
        Ok(())
    }

    // --- Listener ---

    /// Install a listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // --- Appearance ---

    /// The track region.
    #[must_use]
    pub const fn track(&self) -> &Region {
        &self.track
    }

    /// The thumb region.
    #[must_use]
    pub const fn thumb(&self) -> &Region {
        &self.thumb
    }

    /// Replace the track drawable.
    pub fn set_track_drawable(&mut self, drawable: Box<dyn Drawable>) {
        self.track.set_drawable(drawable);
        self.request_redraw();
    }

    /// Replace the thumb drawable.
    pub fn set_thumb_drawable(&mut self, drawable: Box<dyn Drawable>) {
        self.thumb.set_drawable(drawable);
        self.request_redraw();
    }

    /// Set the track paint padding. Only the horizontal sides apply.
    pub fn set_track_padding(&mut self, left: i32, right: i32) {
        self.track.set_padding(Sides::new(0, right, 0, left));
        self.request_redraw();
    }

    /// Set the thumb paint padding on all four sides.
    pub fn set_thumb_padding(&mut self, padding: Sides) {
        self.thumb.set_padding(padding);
        self.request_redraw();
    }

    // --- Interaction configuration ---

    /// Select how pointer events drive the slider.
    pub fn set_touch_profile(&mut self, profile: TouchProfile) {
        self.profile = profile;
    }

    /// Whether a drag gesture is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    // --- Layout ---

    /// Set the minimum-size hints used when a measure axis is unconstrained.
    pub fn set_min_size_hints(&mut self, width: i32, height: i32) {
        self.min_width_hint = width;
        self.min_height_hint = height;
    }

    /// Layout bounds of the track: full width, vertically centered so that
    /// half a thumb's height of margin remains above and below.
    #[must_use]
    pub fn track_bounds(&self) -> Rect {
        let top = (self.height - self.track.height()) / 2;
        Rect::new(0, top, self.width, top + self.track.height())
    }

    /// Layout bounds of the thumb for the current progress.
    ///
    /// Progress maps linearly onto the track's vertical travel with max at
    /// the top, so the offset is measured from `max_progress` downward.
    #[must_use]
    pub fn thumb_bounds(&self) -> Rect {
        let range = (self.max_progress - self.min_progress) as f32;
        let offset = (self.max_progress - self.progress) as f32;
        let top = (offset * self.track.height() as f32 / range).round() as i32;
        Rect::new(0, top, self.thumb.width(), top + self.thumb.height())
    }

    // --- Redraw hook ---

    /// Whether a mutation has requested a redraw since the last
    /// [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Drain the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    // --- Touch mapping ---

    /// Map a pointer y coordinate to a progress value.
    ///
    /// The half-unit bias before truncation rounds to the nearest step
    /// instead of flooring.
    fn progress_at(&self, y: f32) -> i32 {
        let unit = self.track.height() as f32 / (self.max_progress - self.min_progress) as f32;
        let track_top = self.track_bounds().top as f32;
        self.max_progress - ((y - track_top + unit * 0.5) / unit) as i32
    }
}

impl Default for VerticalSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for VerticalSlider {
    /// Resolve the measured size, then size the sub-regions: the thumb is
    /// forced square at the measured width and the track reserves the rest
    /// of the height so the thumb never overflows the widget bounds.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let width = resolve_default_size(self.min_width_hint, width_spec);
        let height = resolve_default_size(self.min_height_hint, height_spec);
        self.width = width;
        self.height = height;
        self.thumb.set_size(width, width);
        self.track.set_size(width, height - width);
        Size::new(width, height)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "slider_draw",
            width = self.width,
            height = self.height,
            progress = self.progress
        )
        .entered();

        let track_bounds = self.track_bounds();
        self.track.draw_into(track_bounds, canvas);
        let thumb_bounds = self.thumb_bounds();
        self.thumb.draw_into(thumb_bounds, canvas);
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match self.profile {
            TouchProfile::Direct => {
                let value = self.progress_at(event.y);
                self.set_progress(value);
            }
            TouchProfile::Tracked => match event.phase {
                PointerPhase::Down => {
                    self.drag = DragState::Dragging;
                    if let Some(listener) = self.listener.as_mut() {
                        listener.on_start_tracking_touch();
                    }
                }
                PointerPhase::Move => {
                    if self.drag == DragState::Dragging {
                        let value = self.progress_at(event.y);
                        self.set_progress(value);
                    }
                }
                PointerPhase::Up => {
                    if self.drag == DragState::Dragging {
                        self.drag = DragState::Idle;
                        if let Some(listener) = self.listener.as_mut() {
                            listener.on_stop_tracking_touch();
                        }
                    }
                }
            },
        }
        true
    }
}
