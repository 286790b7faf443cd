// MIT License

// Copyright (c) 2022 AnonmousDapper

use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

const WIDTH: f64 = crate::WINDOW_WIDTH as f64;
const HEIGHT: f64 = crate::WINDOW_HEIGHT as f64;

const FB_WIDTH: f64 = crate::FB_WIDTH as f64;
const FB_HEIGHT: f64 = crate::FB_HEIGHT as f64;

/// Integer multiple of the framebuffer that fills about two thirds of the display height.
fn frame_scale(display_height: f64) -> f64 {
    (display_height / FB_HEIGHT * 2.0 / 3.0).floor().max(1.0)
}

/// Open a hidden window, size it to the current monitor, then show it.
///
/// Returns the window with its inner size in physical pixels.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
) -> Result<(Window, PhysicalSize<u32>), winit::error::OsError> {
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;

    let hidpi = window.scale_factor();

    let display_height = window
        .current_monitor()
        .map(|display| display.size().to_logical::<f64>(hidpi).height)
        .unwrap_or(HEIGHT);

    let scale = frame_scale(display_height);

    let min_size = LogicalSize::new(FB_WIDTH, FB_HEIGHT);
    let default = LogicalSize::new(
        (FB_WIDTH * scale).max(WIDTH),
        (FB_HEIGHT * scale).max(HEIGHT),
    );

    window.set_inner_size(default);
    window.set_min_inner_size(Some(min_size));
    window.set_visible(true);

    Ok((window, default.to_physical::<u32>(hidpi)))
}
