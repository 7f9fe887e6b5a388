use wireworld::loader::parse;
use wireworld::patterns::{PATTERNS, apply_pattern};
use wireworld::{Cell, Grid, GridError, Pos, Simulation};

fn head_positions(grid: &Grid) -> Vec<Pos> {
    grid.positions()
        .filter(|&p| grid.get(p) == Some(Cell::Head))
        .collect()
}

#[test]
fn electron_travels_along_wire() {
    let grid = parse("tHccc\n", None).unwrap();
    let mut sim = Simulation::new(grid);

    sim.advance();
    assert_eq!(sim.current().to_string(), "ctHcc\n");
    sim.advance();
    assert_eq!(sim.current().to_string(), "cctHc\n");
    sim.advance();
    assert_eq!(sim.current().to_string(), "ccctH\n");
    sim.advance();
    assert_eq!(sim.current().to_string(), "cccct\n");
    sim.advance();
    assert_eq!(sim.current().to_string(), "ccccc\n");
    assert_eq!(sim.generation(), 5);
}

#[test]
fn advance_n_sums_reports() {
    let grid = parse("tHccc\n", None).unwrap();
    let mut sim = Simulation::new(grid);
    let report = sim.advance_n(10);
    assert_eq!(report.unexpected, 0);
    assert_eq!(sim.generation(), 10);
    // Once the electron has left the wire nothing changes.
    assert!(sim.advance().is_static());
}

#[test]
fn clock_loop_keeps_running() {
    let mut grid = Grid::with_size(5, 30).unwrap();
    apply_pattern(&mut grid, &PATTERNS[1]);
    let mut sim = Simulation::new(grid);
    for _ in 0..40 {
        sim.advance();
        assert!(!head_positions(sim.current()).is_empty(), "generation {}", sim.generation());
    }
}

#[test]
fn unexpected_cells_are_reported_each_step() {
    let mut grid = parse("ccc\nc c\nccc\n", None).unwrap();
    grid.set_symbol(Pos::new(1, 1), b'#').unwrap();
    let mut sim = Simulation::new(grid);
    assert_eq!(sim.advance().unexpected, 1);
    assert_eq!(sim.advance_n(3).unexpected, 3);
    assert_eq!(sim.current().symbol(Pos::new(1, 1)), Some(b'#'));
}

#[test]
fn replace_resets_generation_and_shape() {
    let mut sim = Simulation::new(Grid::with_size(2, 2).unwrap());
    sim.advance_n(3);
    sim.replace(parse("tHc\n", None).unwrap());
    assert_eq!(sim.generation(), 0);
    sim.advance();
    assert_eq!(sim.current().to_string(), "ctH\n");
}

#[test]
fn edits_between_steps_are_picked_up() {
    let mut sim = Simulation::new(parse("ccc\n", None).unwrap());
    sim.set(Pos::new(0, 0), Cell::Head).unwrap();
    sim.advance();
    assert_eq!(sim.into_grid().to_string(), "tHc\n");
}

#[test]
fn edits_outside_the_grid_leave_shape_alone() {
    let mut sim = Simulation::new(parse("cc\ncc\n", None).unwrap());
    let dims = sim.current().dims();
    assert_eq!(
        sim.set(Pos::new(2, 0), Cell::Head),
        Err(GridError::OutOfBounds { pos: Pos::new(2, 0), dims })
    );
    assert!(sim.set_symbol(Pos::new(0, 2), b'H').is_err());

    sim.set(Pos::new(1, 1), Cell::Head).unwrap();
    sim.advance();
    assert_eq!(sim.current().dims(), dims);
    assert_eq!(sim.current().to_string(), "HH\nHt\n");
    sim.advance();
    assert_eq!(sim.current().dims(), dims);
    assert_eq!(sim.current().to_string(), "tt\ntc\n");
}

#[test]
fn replace_with_a_different_shape_steps_cleanly() {
    let mut sim = Simulation::new(Grid::with_size(2, 2).unwrap());
    sim.replace(parse("c  \nH  \nc  \n", None).unwrap());
    sim.advance();
    assert_eq!(sim.current().to_string(), "H  \nt  \nH  \n");
    sim.replace(parse("H \n", None).unwrap());
    sim.advance();
    assert_eq!(sim.current().to_string(), "t \n");
}
