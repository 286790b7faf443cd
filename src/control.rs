// MIT License

// Copyright (c) 2022 AnonmousDapper

use std::{fmt, time::Duration};

use log::{debug, info};

use crate::{
    life::{Board, Coord},
    patterns::Pattern,
};

/// Upper bound on generations computed by a single `tick`, so a long stall doesn't queue a burst.
pub const MAX_STEPS_PER_TICK: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Running,
    Stepping,
}

impl Mode {
    /// The mode the cycle key moves to. Editing is only re-entered through a reset.
    pub fn advance(self) -> Self {
        match self {
            Mode::Editing | Mode::Stepping => Mode::Running,
            Mode::Running => Mode::Stepping,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Editing
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Editing => "editing",
            Mode::Running => "running",
            Mode::Stepping => "stepping",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Toggle(Coord),
    Stamp { origin: Coord, pattern: usize },
    AdvanceMode,
    SingleStep,
    Reset,
    Quit,
}

/// Everything the input and render layers share: board, mode and tick cadence.
pub struct Controller {
    board: Board,
    mode: Mode,
    patterns: Vec<Pattern>,
    tick_interval: Duration,
    pending: Duration,
    quit: bool,
}

impl Controller {
    pub fn new(half_extent: i32, tick_interval: Duration) -> Self {
        Self {
            board: Board::new(half_extent),
            mode: Mode::default(),
            patterns: Vec::new(),
            tick_interval,
            pending: Duration::ZERO,
            quit: false,
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<Pattern>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply one input event. Returns whether the board or the mode changed.
    pub fn handle(&mut self, event: Event) -> bool {
        match (event, self.mode) {
            (Event::Toggle(cell), Mode::Editing) => self.board.toggle(cell),

            (Event::Stamp { origin, pattern }, Mode::Editing) => {
                match self.patterns.get(pattern) {
                    Some(p) => {
                        let born = self.board.stamp(origin, p.cells());
                        debug!("stamped {} at {:?}, {} born", p.name(), origin, born);
                        born > 0
                    }
                    None => {
                        debug!("no pattern in slot {}", pattern);
                        false
                    }
                }
            }

            (Event::AdvanceMode, mode) => {
                self.set_mode(mode.advance());
                true
            }

            (Event::SingleStep, Mode::Stepping) => {
                self.board.step();
                true
            }

            (Event::Reset, Mode::Editing) => {
                info!("board cleared");
                self.board.reset();
                true
            }

            (Event::Reset, _) => {
                self.set_mode(Mode::Editing);
                true
            }

            (Event::Quit, _) => {
                self.quit = true;
                false
            }

            (event, mode) => {
                debug!("ignoring {:?} while {}", event, mode);
                false
            }
        }
    }

    /// Advance the clock by `elapsed`. While running, steps once per tick interval.
    ///
    /// Returns the number of generations computed.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if self.mode != Mode::Running {
            self.pending = Duration::ZERO;
            return 0;
        }

        self.pending += elapsed;

        let mut steps = 0;
        while self.pending >= self.tick_interval && steps < MAX_STEPS_PER_TICK {
            self.pending -= self.tick_interval;
            self.board.step();
            steps += 1;
        }

        if steps == MAX_STEPS_PER_TICK {
            self.pending = self.pending.min(self.tick_interval);
        }

        steps
    }

    fn set_mode(&mut self, mode: Mode) {
        info!("{} -> {}", self.mode, mode);
        self.mode = mode;
        self.pending = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn controller() -> Controller {
        Controller::new(30, TICK)
    }

    fn line(c: &mut Controller) {
        for cell in [(-1, 0), (0, 0), (1, 0)] {
            assert!(c.handle(Event::Toggle(cell)));
        }
    }

    #[test]
    fn mode_cycle() {
        assert_eq!(Mode::Editing.advance(), Mode::Running);
        assert_eq!(Mode::Running.advance(), Mode::Stepping);
        assert_eq!(Mode::Stepping.advance(), Mode::Running);
    }

    #[test]
    fn starts_editing_and_empty() {
        let c = controller();

        assert_eq!(c.mode(), Mode::Editing);
        assert_eq!(c.board().population(), 0);
        assert!(!c.should_quit());
    }

    #[test]
    fn toggle_only_while_editing() {
        let mut c = controller();
        c.handle(Event::AdvanceMode);

        assert!(!c.handle(Event::Toggle((0, 0))));
        assert_eq!(c.board().population(), 0);

        c.handle(Event::AdvanceMode);
        assert_eq!(c.mode(), Mode::Stepping);
        assert!(!c.handle(Event::Toggle((0, 0))));
    }

    #[test]
    fn single_step_only_while_stepping() {
        let mut c = controller();
        line(&mut c);

        assert!(!c.handle(Event::SingleStep));
        assert_eq!(c.board().generation(), 0);

        c.handle(Event::AdvanceMode);
        c.handle(Event::AdvanceMode);
        assert!(c.handle(Event::SingleStep));
        assert_eq!(c.board().generation(), 1);
        assert_eq!(c.board().population(), 2);
    }

    #[test]
    fn reset_returns_to_editing_then_clears() {
        let mut c = controller();
        line(&mut c);
        c.handle(Event::AdvanceMode);

        assert!(c.handle(Event::Reset));
        assert_eq!(c.mode(), Mode::Editing);
        assert_eq!(c.board().population(), 3);

        assert!(c.handle(Event::Reset));
        assert_eq!(c.board().population(), 0);
    }

    #[test]
    fn running_steps_on_the_tick_interval() {
        let mut c = controller();
        line(&mut c);

        assert_eq!(c.tick(TICK * 3), 0);

        c.handle(Event::AdvanceMode);
        assert_eq!(c.tick(Duration::from_millis(60)), 0);
        assert_eq!(c.tick(Duration::from_millis(60)), 1);
        assert_eq!(c.board().generation(), 1);
        assert_eq!(c.tick(Duration::from_millis(80)), 1);
        assert_eq!(c.board().generation(), 2);
    }

    #[test]
    fn tick_is_capped_after_a_stall() {
        let mut c = controller();
        c.handle(Event::AdvanceMode);

        assert_eq!(c.tick(TICK * 50), MAX_STEPS_PER_TICK);
        assert_eq!(c.tick(Duration::ZERO), 1);
        assert_eq!(c.tick(Duration::ZERO), 0);
    }

    #[test]
    fn stepping_mode_ignores_the_clock() {
        let mut c = controller();
        c.handle(Event::AdvanceMode);
        c.handle(Event::AdvanceMode);

        assert_eq!(c.tick(TICK * 10), 0);
        assert_eq!(c.board().generation(), 0);
    }

    #[test]
    fn stamp_uses_the_pattern_library() {
        let glider = Pattern::new("glider", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut c = controller().with_patterns(vec![glider]);

        assert!(c.handle(Event::Stamp {
            origin: (0, 0),
            pattern: 0
        }));
        assert_eq!(c.board().population(), 5);

        assert!(!c.handle(Event::Stamp {
            origin: (0, 0),
            pattern: 3
        }));
    }

    #[test]
    fn quit_from_any_mode() {
        let mut c = controller();
        c.handle(Event::AdvanceMode);
        c.handle(Event::Quit);

        assert!(c.should_quit());
    }
}
