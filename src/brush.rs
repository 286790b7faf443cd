// MIT License

// Copyright (c) 2022 AnonmousDapper

use line_drawing::Bresenham;

use crate::{
    control::Event,
    life::{Board, Coord},
};

#[derive(Clone, Copy, Debug)]
struct Stroke {
    paint: bool,
    last: Coord,
}

/// Mouse-hold painting. The first cell of a stroke decides whether the stroke draws or erases,
/// and every cell the cursor sweeps over afterwards is brought to that state.
#[derive(Debug, Default)]
pub struct Brush {
    stroke: Option<Stroke>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn press(&mut self, cell: Coord, board: &Board) -> Vec<Event> {
        let paint = !board.is_alive(cell);
        self.stroke = Some(Stroke { paint, last: cell });

        apply(paint, [cell], board)
    }

    /// Continue the stroke to `cell`. Starts a new stroke if none is active.
    pub fn drag(&mut self, cell: Coord, board: &Board) -> Vec<Event> {
        let stroke = match self.stroke {
            Some(stroke) => stroke,
            None => return self.press(cell, board),
        };

        if stroke.last == cell {
            return Vec::new();
        }

        self.stroke = Some(Stroke { last: cell, ..stroke });

        apply(
            stroke.paint,
            Bresenham::new(stroke.last, cell).skip(1),
            board,
        )
    }

    pub fn release(&mut self) {
        self.stroke = None;
    }
}

fn apply(paint: bool, cells: impl IntoIterator<Item = Coord>, board: &Board) -> Vec<Event> {
    let torus = board.torus();

    cells
        .into_iter()
        .filter(|&cell| torus.contains(cell) && board.is_alive(cell) != paint)
        .map(Event::Toggle)
        .collect()
}
