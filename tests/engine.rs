// MIT License

// Copyright (c) 2022 AnonmousDapper

use std::time::Duration;

use torlife::{
    control::{Controller, Event, Mode},
    life::{wrap, Board, CellSet, Coord, Torus},
    patterns,
    settings::Settings,
};

fn set(cells: &[Coord]) -> CellSet {
    cells.iter().copied().collect()
}

#[test]
fn wrap_maps_the_seam() {
    assert_eq!(wrap(30, 30), -30);
    assert_eq!(wrap(-31, 30), 29);
}

#[test]
fn line_fades_out_in_two_generations() {
    let mut board = Board::new(30);
    for cell in [(-1, 0), (0, 0), (1, 0)] {
        assert!(board.toggle(cell));
    }

    board.step();
    assert_eq!(board.current(), &set(&[(0, -1), (0, 1)]));

    board.step();
    assert!(board.current().is_empty());
    assert_eq!(board.generation(), 2);
}

#[test]
fn block_across_the_corner_is_still() {
    let torus = Torus::new(30);
    let block = set(&[(29, 29), (-30, 29), (29, -30), (-30, -30)]);

    assert_eq!(torus.step(&block), block);
}

#[test]
fn edit_run_step_reset_session() {
    let settings = Settings::load().unwrap();
    let mut c = Controller::new(settings.half_extent, settings.tick_interval())
        .with_patterns(patterns::load().unwrap());

    assert!(c.handle(Event::Stamp {
        origin: (0, 0),
        pattern: 1
    }));
    let block = c.board().current().clone();
    assert_eq!(block.len(), 4);

    c.handle(Event::AdvanceMode);
    assert_eq!(c.mode(), Mode::Running);
    assert_eq!(c.tick(settings.tick_interval() * 2), 2);
    assert_eq!(c.board().current(), &block);

    c.handle(Event::AdvanceMode);
    assert_eq!(c.mode(), Mode::Stepping);
    assert_eq!(c.tick(Duration::from_secs(10)), 0);
    assert!(c.handle(Event::SingleStep));
    assert_eq!(c.board().generation(), 3);

    assert!(!c.handle(Event::Toggle((10, 10))));

    c.handle(Event::Reset);
    assert_eq!(c.mode(), Mode::Editing);
    assert!(c.handle(Event::Toggle((10, 10))));
    assert!(c.board().is_alive((10, 10)));

    c.handle(Event::Reset);
    assert_eq!(c.board().population(), 0);
    assert_eq!(c.board().generation(), 0);
}
