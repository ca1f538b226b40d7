use proptest::prelude::*;

use termlife::Cell;
use termlife::Grid;
use termlife::GridError;

fn empty(width: usize, height: usize) -> Grid {
    Grid::seeded(width, height, 0, 0).unwrap()
}

fn cells(grid: &Grid) -> Vec<Cell> {
    grid.view().rows().flatten().copied().collect()
}

fn place(grid: &mut Grid, pattern: &[(usize, usize)]) {
    for &(x, y) in pattern {
        grid.set(x, y, Cell::Alive);
    }
}

#[test]
fn blinker_end_to_end() {
    let mut grid = Grid::new(5, 5, 0).unwrap();
    grid.reset(0).unwrap();
    place(&mut grid, &[(1, 2), (2, 2), (3, 2)]);

    let start = cells(&grid);

    assert!(grid.step());
    assert_eq!(grid.population(), 3);
    assert_eq!(grid.cell(2, 1), Cell::Alive);
    assert_eq!(grid.cell(2, 3), Cell::Alive);
    assert_eq!(grid.cell(1, 2), Cell::Dead);

    // Still reported as a change, even though the pattern repeats
    assert!(grid.step());
    assert_eq!(cells(&grid), start);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn block_is_still_life() {
    let mut grid = empty(6, 6);
    place(&mut grid, &[(2, 2), (3, 2), (2, 3), (3, 3)]);

    let start = cells(&grid);

    for _ in 0..20 {
        assert!(!grid.step());
        assert_eq!(cells(&grid), start);
    }
}

#[test]
fn corner_of_full_board_has_three_neighbors() {
    let mut grid = empty(25, 10);
    grid.reset(250).unwrap();

    assert_eq!(grid.count_alive_neighbors(0, 0), 3);
    assert_eq!(grid.count_alive_neighbors(24, 9), 3);
    assert_eq!(grid.count_alive_neighbors(12, 0), 5);
}

#[test]
fn generation_counts_every_step() {
    let mut grid = Grid::seeded(25, 10, 50, 42).unwrap();

    for i in 1..=150 {
        grid.step();
        assert_eq!(grid.generation(), i);
    }

    grid.reset(10).unwrap();
    assert_eq!(grid.generation(), 0);
}

#[test]
fn oversized_population_is_rejected() {
    let mut grid = empty(25, 10);

    assert_eq!(
        grid.reset(251),
        Err(GridError::InvalidPopulation {
            requested: 251,
            capacity: 250
        })
    );
    assert_eq!((grid.width(), grid.height()), (25, 10));
}

#[test]
fn seeded_boards_repeat() {
    let a = Grid::seeded(25, 10, 50, 1234).unwrap();
    let b = Grid::seeded(25, 10, 50, 1234).unwrap();

    assert_eq!(cells(&a), cells(&b));
}

proptest! {
    #[test]
    fn reset_places_exact_population(w in 1usize..16, h in 1usize..16, frac in 0.0f64..=1.0) {
        let k = ((w * h) as f64 * frac) as usize;
        let mut grid = Grid::new(w, h, 0).unwrap();
        grid.step();

        grid.reset(k).unwrap();

        prop_assert_eq!(grid.population(), k);
        prop_assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn oversized_reset_fails(w in 1usize..16, h in 1usize..16, extra in 1usize..100) {
        let mut grid = Grid::new(w, h, 0).unwrap();

        prop_assert!(grid.reset(w * h + extra).is_err());
        prop_assert_eq!((grid.width(), grid.height()), (w, h));
    }

    #[test]
    fn dead_board_stays_dead(w in 1usize..20, h in 1usize..20) {
        let mut grid = empty(w, h);

        prop_assert!(!grid.step());
        prop_assert_eq!(grid.population(), 0);
        prop_assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn lone_cell_dies(w in 1usize..20, h in 1usize..20, x in 0usize..20, y in 0usize..20) {
        let (x, y) = (x % w, y % h);
        let mut grid = empty(w, h);
        grid.set(x, y, Cell::Alive);

        prop_assert_eq!(grid.count_alive_neighbors(x, y), 0);
        prop_assert!(grid.step());
        prop_assert_eq!(grid.population(), 0);
    }

    #[test]
    fn blinker_has_period_two(w in 5usize..20, h in 5usize..20, x in 0usize..20, y in 0usize..20, vertical: bool) {
        // Keep a one cell margin around the 3x3 box the blinker swings through
        let cx = 2 + x % (w - 4);
        let cy = 2 + y % (h - 4);

        let mut grid = empty(w, h);
        if vertical {
            place(&mut grid, &[(cx, cy - 1), (cx, cy), (cx, cy + 1)]);
        } else {
            place(&mut grid, &[(cx - 1, cy), (cx, cy), (cx + 1, cy)]);
        }

        let mut history = vec![cells(&grid)];
        for _ in 0..6 {
            prop_assert!(grid.step());
            history.push(cells(&grid));
        }

        for n in 0..history.len() - 2 {
            prop_assert_eq!(&history[n], &history[n + 2]);
            prop_assert_ne!(&history[n], &history[n + 1]);
        }
    }

    #[test]
    fn neighbor_count_is_bounded(w in 1usize..12, h in 1usize..12, k in 0usize..144, seed: u64) {
        let k = k.min(w * h);
        let grid = Grid::seeded(w, h, k, seed).unwrap();

        for y in 0..h {
            for x in 0..w {
                prop_assert!(grid.count_alive_neighbors(x, y) <= 8);
            }
        }
    }
}
