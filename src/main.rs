// MIT License

// Copyright (c) 2022 AnonmousDapper

#![deny(rust_2018_idioms)]

use std::time::Instant;

use glam::Vec2;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};

use winit::{
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
};

use winit_input_helper::WinitInputHelper;

use log::{error, info};

use torlife::{
    brush::Brush,
    camera::{Camera, ScreenPos},
    canvas::Canvas,
    control::{self, Controller},
    patterns,
    settings::Settings,
    view::{self, Palette},
};

const TITLE: &str = "torlife";

const ZOOM_STEP: f32 = 1.25;

const LEFT: usize = 0;
const RIGHT: usize = 1;

const STAMP_KEYS: [VirtualKeyCode; 9] = [
    VirtualKeyCode::Key1,
    VirtualKeyCode::Key2,
    VirtualKeyCode::Key3,
    VirtualKeyCode::Key4,
    VirtualKeyCode::Key5,
    VirtualKeyCode::Key6,
    VirtualKeyCode::Key7,
    VirtualKeyCode::Key8,
    VirtualKeyCode::Key9,
];

/// Window position to framebuffer position. Positions off the frame are kept, not clamped,
/// so panning keeps working past the edge.
fn to_screen(pixels: &Pixels, (x, y): (f32, f32)) -> ScreenPos {
    let (px, py) = pixels
        .window_pos_to_pixel((x, y))
        .map(|(px, py)| (px as isize, py as isize))
        .unwrap_or_else(|pos| pos);

    Vec2::new(px as f32, py as f32)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::load()?;
    let patterns = patterns::load()?;

    info!(
        "board {0}x{0}, {1} patterns, tick {2}ms",
        settings.half_extent * 2,
        patterns.len(),
        settings.tick_ms
    );

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let (window, size) = torlife::window::create_window(TITLE, &event_loop)?;

    let mut pixels = {
        let surtex = SurfaceTexture::new(size.width, size.height, &window);
        PixelsBuilder::new(torlife::FB_WIDTH as u32, torlife::FB_HEIGHT as u32, surtex)
            .texture_format(torlife::FRAME_TEXTURE_FORMAT)
            .enable_vsync(true)
            .build()?
    };

    let mut controller =
        Controller::new(settings.half_extent, settings.tick_interval()).with_patterns(patterns);
    let mut camera = Camera::new(settings.zoom, settings.min_zoom, settings.max_zoom);
    let mut brush = Brush::new();
    let mut canvas = Canvas::new();
    let palette = Palette::from(&settings);

    let mut last_frame = Instant::now();
    let mut title = String::new();

    event_loop.run(move |evt, _, flow| {
        if let Event::RedrawRequested(_) = evt {
            view::draw(controller.board(), &camera, &palette, &mut canvas);
            canvas.render_to(pixels.get_frame());

            if pixels
                .render()
                .map_err(|e| error!("pixels render failed: {}", e))
                .is_err()
            {
                *flow = ControlFlow::Exit;
                return;
            }
        }

        if !input.update(&evt) {
            return;
        }

        if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
            controller.handle(control::Event::Quit);
        }

        if let Some(size) = input.window_resized() {
            pixels.resize_surface(size.width, size.height);
        }

        let cursor = input.mouse().map(|pos| to_screen(&pixels, pos));
        let hovered = cursor.and_then(|pos| camera.cell_at(pos, &controller.board().torus()));

        let mut events = Vec::new();

        if input.key_pressed(VirtualKeyCode::Space) {
            events.push(control::Event::AdvanceMode);
        }

        if input.key_pressed(VirtualKeyCode::Return) || input.key_pressed(VirtualKeyCode::Right) {
            events.push(control::Event::SingleStep);
        }

        if input.key_pressed(VirtualKeyCode::R) || input.key_pressed(VirtualKeyCode::Back) {
            events.push(control::Event::Reset);
        }

        if input.key_pressed(VirtualKeyCode::C) {
            camera.reset();
        }

        if let Some(origin) = hovered {
            for (pattern, key) in STAMP_KEYS.iter().enumerate() {
                if input.key_pressed(*key) {
                    events.push(control::Event::Stamp { origin, pattern });
                }
            }
        }

        if controller.mode() == control::Mode::Editing {
            match hovered {
                Some(cell) if input.mouse_pressed(LEFT) => {
                    events.extend(brush.press(cell, controller.board()))
                }
                Some(cell) if input.mouse_held(LEFT) => {
                    events.extend(brush.drag(cell, controller.board()))
                }
                _ => {}
            }
        }

        if input.mouse_released(LEFT) {
            brush.release();
        }

        if let Some(pos) = cursor {
            if input.mouse_held(RIGHT) {
                let (dx, dy) = input.mouse_diff();
                if let Some((x, y)) = input.mouse() {
                    let prev = to_screen(&pixels, (x - dx, y - dy));
                    camera.pan(pos - prev);
                }
            }

            let scroll = input.scroll_diff();
            if scroll != 0.0 {
                camera.zoom_at(pos, ZOOM_STEP.powf(scroll));
            }
        }

        for event in events {
            controller.handle(event);
        }

        let now = Instant::now();
        controller.tick(now - last_frame);
        last_frame = now;

        if controller.should_quit() {
            info!("quitting at generation {}", controller.board().generation());
            *flow = ControlFlow::Exit;
            return;
        }

        let board = controller.board();
        let next_title = format!(
            "{} - {} - gen {} - {} alive",
            TITLE,
            controller.mode(),
            board.generation(),
            board.population()
        );
        if next_title != title {
            window.set_title(&next_title);
            title = next_title;
        }

        window.request_redraw();
    });
}
