// MIT License

// Copyright (c) 2022 AnonmousDapper

use std::collections::BTreeSet;

use log::{debug, trace};

/// A cell on the board, `(x, y)`.
pub type Coord = (i32, i32);

/// Live cells, ordered so iteration is deterministic.
pub type CellSet = BTreeSet<Coord>;

/// Neighbour count at which a cell is alive next generation regardless of its state.
pub const BIRTH: u8 = 3;

/// Neighbour count at which a cell keeps whatever state it had.
pub const STASIS: u8 = 4;

const OFFSETS: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Map any integer onto the cyclic range `[-n, n)`.
///
/// Floor-style modulo, so negative inputs land in range too. `n` must be positive.
pub fn wrap(value: i32, n: i32) -> i32 {
    let n = n as i64;
    ((value as i64 + n).rem_euclid(2 * n) - n) as i32
}

/// Geometry of a square wraparound board spanning `[-half_extent, half_extent)` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    half_extent: i32,
}

impl Torus {
    pub fn new(half_extent: i32) -> Self {
        assert!(half_extent > 0, "board half-extent must be positive");

        Self { half_extent }
    }

    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// Cells per side.
    pub fn side(&self) -> i32 {
        self.half_extent * 2
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        let n = self.half_extent;
        (-n..n).contains(&x) && (-n..n).contains(&y)
    }

    pub fn wrap(&self, (x, y): Coord) -> Coord {
        (wrap(x, self.half_extent), wrap(y, self.half_extent))
    }

    pub fn neighbors(&self, (x, y): Coord) -> [Coord; 8] {
        OFFSETS.map(|(dx, dy)| self.wrap((x.wrapping_add(dx), y.wrapping_add(dy))))
    }

    pub fn live_neighbor_count(&self, cell: Coord, live: &CellSet) -> u8 {
        self.neighbors(cell)
            .iter()
            .filter(|n| live.contains(*n))
            .count() as u8
    }

    /// Every cell whose state could change next generation: the live cells and their neighbours.
    pub fn candidate_cells(&self, live: &CellSet) -> CellSet {
        let mut candidates = CellSet::new();

        for &cell in live {
            candidates.insert(cell);
            candidates.extend(self.neighbors(cell));
        }

        candidates
    }

    /// Compute the generation after `live`. Only `live` is read; the result is a fresh set.
    pub fn step(&self, live: &CellSet) -> CellSet {
        self.candidate_cells(live)
            .into_iter()
            .filter(|cell| match self.live_neighbor_count(*cell, live) {
                BIRTH => true,
                STASIS => live.contains(cell),
                _ => false,
            })
            .collect()
    }
}

/// Double-buffered board state.
#[derive(Clone, Debug)]
pub struct Board {
    torus: Torus,
    current: CellSet,
    previous: CellSet,
    generation: u64,
}

impl Board {
    pub fn new(half_extent: i32) -> Self {
        Self {
            torus: Torus::new(half_extent),
            current: CellSet::new(),
            previous: CellSet::new(),
            generation: 0,
        }
    }

    pub fn torus(&self) -> Torus {
        self.torus
    }

    pub fn current(&self) -> &CellSet {
        &self.current
    }

    /// Cells that were alive one generation ago.
    pub fn previous(&self) -> &CellSet {
        &self.previous
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.len()
    }

    pub fn is_alive(&self, cell: Coord) -> bool {
        self.current.contains(&cell)
    }

    /// Flip a cell. Returns `false` without touching the board if the cell is off the board.
    pub fn toggle(&mut self, cell: Coord) -> bool {
        if !self.torus.contains(cell) {
            debug!("toggle rejected, {:?} is off the board", cell);
            return false;
        }

        if !self.current.remove(&cell) {
            self.current.insert(cell);
        }

        true
    }

    /// Bring every `origin + offset` to life, wrapping around the edges.
    ///
    /// Returns how many cells were born.
    pub fn stamp(&mut self, origin: Coord, offsets: &[Coord]) -> usize {
        if !self.torus.contains(origin) {
            debug!("stamp rejected, {:?} is off the board", origin);
            return 0;
        }

        let (ox, oy) = origin;

        offsets
            .iter()
            .map(|&(dx, dy)| {
                self.torus
                    .wrap((ox.wrapping_add(dx), oy.wrapping_add(dy)))
            })
            .filter(|&cell| self.current.insert(cell))
            .count()
    }

    pub fn step(&mut self) {
        let next = self.torus.step(&self.current);
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;

        trace!(
            "generation {}: {} alive",
            self.generation,
            self.current.len()
        );
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.generation = 0;
    }
}
