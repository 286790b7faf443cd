// MIT License

// Copyright (c) 2022 AnonmousDapper

use crate::{
    camera::Camera,
    canvas::{Canvas, Render, RgbaF16},
    life::Board,
    settings::Settings,
};

/// Below this many pixels per cell the grid lines would swamp the board.
pub const GRID_MIN_ZOOM: i32 = 4;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: RgbaF16,
    pub board: RgbaF16,
    pub grid: RgbaF16,
    pub live: RgbaF16,
    pub fading: RgbaF16,
}

impl From<&Settings> for Palette {
    fn from(settings: &Settings) -> Self {
        Self {
            background: settings.background.into(),
            board: settings.board.into(),
            grid: settings.grid.into(),
            live: settings.live.into(),
            fading: settings.fading.into(),
        }
    }
}

pub fn draw(board: &Board, camera: &Camera, palette: &Palette, canvas: &mut Canvas) {
    let torus = board.torus();
    let n = torus.half_extent();
    let size = camera.cell_size();

    canvas.fill(palette.background);

    let (left, top) = camera.cell_origin((-n, -n));
    let (right, bottom) = camera.cell_origin((n, n));
    canvas.rect((left, top), right - left, bottom - top, palette.board);

    if size >= GRID_MIN_ZOOM {
        for i in -n..=n {
            let (x, y) = camera.cell_origin((i, i));
            canvas.line((x - 1, top), (x - 1, bottom - 1), palette.grid);
            canvas.line((left, y - 1), (right - 1, y - 1), palette.grid);
        }
    }

    for &cell in board.previous().difference(board.current()) {
        canvas.tile(camera.cell_origin(cell), size, palette.fading);
    }

    for &cell in board.current() {
        canvas.tile(camera.cell_origin(cell), size, palette.live);
    }
}
