use life_core::patterns::{BEACON, BLINKER, BLOCK, GLIDER};
use life_core::{
    BoundaryMode, Grid, LifeEngine, LifeError, NeighbourGrid, count_neighbours, initialize_seeded, step,
};
use proptest::prelude::*;

fn filled(rows: usize, cols: usize) -> Grid {
    let row = vec![1u8; cols];
    Grid::from_rows(vec![row; rows].as_slice()).unwrap()
}

fn on_border(row: usize, col: usize, rows: usize, cols: usize) -> bool {
    row == 0 || col == 0 || row == rows - 1 || col == cols - 1
}

#[test]
fn all_dead_stays_dead() {
    for mode in BoundaryMode::ALL {
        let grid = Grid::new(9, 13).unwrap();
        let next = LifeEngine::new(mode).step(&grid);
        assert_eq!(next, grid, "{mode}");
    }
}

#[test]
fn all_alive_dies_except_frozen_edge() {
    for size in [5, 7] {
        let grid = filled(size, size);
        let next = step(&grid);
        for row in 0..size {
            for col in 0..size {
                let expected = u8::from(row == size - 1 || col == size - 1);
                assert_eq!(next.get(row, col), Some(expected), "({row}, {col}) in {size}x{size}");
            }
        }
    }
}

#[test]
fn isolated_cell_dies() {
    let mut grid = Grid::new(7, 7).unwrap();
    grid.set(3, 3, true).unwrap();
    assert_eq!(step(&grid).population(), 0);
}

#[test]
fn block_is_still_life() {
    for mode in BoundaryMode::ALL {
        let engine = LifeEngine::new(mode);
        let start = Grid::from_pattern(8, 8, &BLOCK, (3, 3)).unwrap();
        let mut grid = start.clone();
        for generation in 1..=5 {
            grid = engine.step(&grid);
            assert_eq!(grid, start, "{mode} generation {generation}");
        }
    }
}

#[test]
fn two_by_two_only_touches_top_left() {
    let dead = Grid::new(2, 2).unwrap();
    assert_eq!(step(&dead), dead);

    // (0, 0) is the single updatable cell and always counts 0 neighbours.
    let next = step(&filled(2, 2));
    assert_eq!(next.to_rows(), vec![vec![0, 1], vec![1, 1]]);
}

#[test]
fn single_cell_grid_never_changes() {
    let grid = filled(1, 1);
    assert_eq!(step(&grid), grid);
    assert_eq!(count_neighbours(&grid).to_rows(), vec![vec![0]]);
}

#[test]
fn three_by_three_reference_table() {
    let grid = Grid::from_rows(&[[1, 1, 0], [1, 1, 0], [0, 0, 0]]).unwrap();

    let neighbours = count_neighbours(&grid);
    assert_eq!(neighbours.to_rows(), vec![vec![0, 0, 0], vec![0, 3, 0], vec![0, 0, 0]]);

    // Updated cells are rows 0..=1, cols 0..=1:
    //   (0,0) alive, count 0 -> 0
    //   (0,1) alive, count 0 -> 0
    //   (1,0) alive, count 0 -> 0
    //   (1,1) alive, count 3 -> 1
    // Row 2 and column 2 keep their previous values.
    let next = step(&grid);
    assert_eq!(next.to_rows(), vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
}

#[test]
fn supplied_neighbours_must_match() {
    let mut grid = Grid::new(4, 4).unwrap();
    let neighbours = NeighbourGrid::new(4, 5).unwrap();
    assert_eq!(
        LifeEngine::default().apply_transition(&mut grid, &neighbours),
        Err(LifeError::ShapeMismatch { expected: (4, 4), found: (4, 5) })
    );
}

#[test]
fn blinker_has_period_two_in_textbook_modes() {
    for mode in [BoundaryMode::ZeroPadded, BoundaryMode::Toroidal] {
        let engine = LifeEngine::new(mode);
        let start = Grid::from_pattern(5, 5, &BLINKER, (2, 1)).unwrap();
        let once = engine.step(&start);
        assert_ne!(once, start);
        assert!(once.is_alive(1, 2) && once.is_alive(2, 2) && once.is_alive(3, 2));
        assert_eq!(engine.step(&once), start, "{mode}");
    }
}

#[test]
fn beacon_oscillates_in_reference_interior() {
    let start = Grid::from_pattern(8, 8, &BEACON, (2, 2)).unwrap();
    let once = step(&start);
    assert_eq!(once.population(), 6);
    assert_eq!(step(&once), start);
}

#[test]
fn glider_wraps_around_torus() {
    let engine = LifeEngine::new(BoundaryMode::Toroidal);
    let start = Grid::from_pattern(8, 8, &GLIDER, (0, 0)).unwrap();
    let mut grid = start.clone();
    for _ in 0..32 {
        grid = engine.step(&grid);
        assert_eq!(grid.population(), 5);
    }
    assert_eq!(grid, start);
}

#[test]
fn glider_dies_at_reference_edge() {
    let mut grid = Grid::from_pattern(10, 10, &GLIDER, (1, 1)).unwrap();
    for _ in 0..40 {
        grid = step(&grid);
    }
    let (rows, cols) = grid.shape();
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            if on_border(row, col, rows, cols) {
                assert!(!grid.is_alive(row, col), "border ({row}, {col}) alive");
            }
        }
    }
}

#[test]
fn seeded_grids_step_deterministically() {
    let a = initialize_seeded(40, 40, 2024).unwrap();
    let b = initialize_seeded(40, 40, 2024).unwrap();
    assert_eq!(step(&step(&a)), step(&step(&b)));
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0u8..=1, rows * cols).prop_map(move |cells| {
            let nested: Vec<&[u8]> = cells.chunks(cols).collect();
            Grid::from_rows(nested.as_slice()).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn neighbour_border_is_zero(grid in arb_grid()) {
        let neighbours = count_neighbours(&grid);
        let (rows, cols) = grid.shape();
        prop_assert_eq!(neighbours.shape(), (rows, cols));
        for row in 0..rows {
            for col in 0..cols {
                let count = neighbours.get(row, col).unwrap();
                prop_assert!(count <= 8);
                if on_border(row, col, rows, cols) {
                    prop_assert_eq!(count, 0);
                }
            }
        }
    }

    #[test]
    fn last_row_and_column_are_frozen(grid in arb_grid()) {
        let next = step(&grid);
        let (rows, cols) = grid.shape();
        prop_assert_eq!(next.shape(), (rows, cols));
        for col in 0..cols {
            prop_assert_eq!(next.get(rows - 1, col), grid.get(rows - 1, col));
        }
        for row in 0..rows {
            prop_assert_eq!(next.get(row, cols - 1), grid.get(row, cols - 1));
        }
    }

    #[test]
    fn updated_border_cells_are_dead(grid in arb_grid()) {
        let next = step(&grid);
        let (rows, cols) = grid.shape();
        for row in 0..rows - 1 {
            for col in 0..cols - 1 {
                if row == 0 || col == 0 {
                    prop_assert_eq!(next.get(row, col), Some(0));
                }
            }
        }
    }

    #[test]
    fn in_place_matches_pure_step(grid in arb_grid(), mode_index in 0usize..3) {
        let engine = LifeEngine::new(BoundaryMode::ALL[mode_index]);
        let mut in_place = grid.clone();
        engine.step_in_place(&mut in_place);
        prop_assert_eq!(in_place, engine.step(&grid));
    }

    #[test]
    fn reusing_neighbour_buffer_matches_fresh(first in arb_grid(), seed in any::<u64>()) {
        let (rows, cols) = first.shape();
        let second = initialize_seeded(rows, cols, seed).unwrap();
        let engine = LifeEngine::default();
        let mut buffer = engine.count_neighbours(&first);
        engine.count_neighbours_into(&second, &mut buffer).unwrap();
        prop_assert_eq!(buffer, engine.count_neighbours(&second));
    }
}
