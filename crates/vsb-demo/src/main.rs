#![forbid(unsafe_code)]

//! Demo host for the vertical seek bar.
//!
//! Plays the role of the host activity: builds a slider from attributes,
//! subscribes a listener that logs every committed progress value, then
//! drives one synthetic measure → draw → drag-gesture → draw cycle against
//! a recording canvas and prints the paint log.

use tracing_subscriber::EnvFilter;
use vsb_core::event::PointerEvent;
use vsb_core::measure::MeasureSpec;
use vsb_render::canvas::RecordingCanvas;
use vsb_widgets::{SliderAttrs, VerticalSlider, Widget};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let attrs = SliderAttrs {
        progress: Some(30),
        ..Default::default()
    };
    let mut slider = match VerticalSlider::with_attrs(attrs) {
        Ok(slider) => slider,
        Err(e) => {
            eprintln!("Bad slider attributes: {e}");
            std::process::exit(1);
        }
    };
    slider.set_listener(|progress: i32| tracing::info!(progress, "progress changed"));

    // Layout pass: the host proposes an exact 300x400 slot.
    let size = slider.measure(MeasureSpec::exactly(300), MeasureSpec::exactly(400));
    tracing::info!(width = size.width, height = size.height, "measured");

    let mut canvas = RecordingCanvas::new();
    slider.draw(&mut canvas);
    print_frame("initial frame", &canvas);

    // A drag from the bottom of the track to the top.
    let x = size.width as f32 / 2.0;
    slider.handle_pointer(PointerEvent::down(x, 350.0));
    for y in [320.0, 280.0, 240.0, 200.0, 160.0] {
        slider.handle_pointer(PointerEvent::moved(x, y));
    }
    slider.handle_pointer(PointerEvent::up(x, 160.0));

    if slider.take_redraw() {
        canvas.clear();
        slider.draw(&mut canvas);
        print_frame("after drag", &canvas);
    }

    tracing::info!(progress = slider.progress(), "final progress");
}

fn print_frame(label: &str, canvas: &RecordingCanvas) {
    println!("{label}:");
    for op in canvas.ops() {
        println!("  {op:?}");
    }
}
