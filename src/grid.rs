use std::mem;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use tracing::debug;

use crate::cell::Cell;
use crate::error::GridError;
use crate::rule;

/// Number of cells seeded alive when the caller does not ask for a specific population
pub const DEFAULT_POPULATION: usize = 50;

pub const DEFAULT_WIDTH: usize = 25;
pub const DEFAULT_HEIGHT: usize = 10;

/// A bounded Game of Life board.
///
/// Positions outside of `[0, width) x [0, height)` do not exist: the board does not wrap around,
/// so cells on an edge simply have fewer neighbors.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Width of the board, in cells
    width: usize,

    /// Height of the board, in cells
    height: usize,

    /// Current generation, stored row by row
    cells: Vec<Cell>,

    /// The next generation is computed here, then swapped with `cells`
    scratch: Vec<Cell>,

    /// Number of steps taken since the last reset
    generation: u64,

    rng: StdRng,
}

impl Grid {
    /// Create a `width` by `height` board with `population` cells alive at random positions.
    pub fn new(width: usize, height: usize, population: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, population, StdRng::from_os_rng())
    }

    /// Like `new`, but every random draw comes from `seed`, so the same seed always yields the
    /// same boards.
    pub fn seeded(
        width: usize,
        height: usize,
        population: usize,
        seed: u64,
    ) -> Result<Self, GridError> {
        Self::with_rng(width, height, population, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: usize,
        height: usize,
        population: usize,
        rng: StdRng,
    ) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let Some(n) = width.checked_mul(height) else {
            return Err(invalid);
        };

        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Dead; n],
            scratch: vec![Cell::Dead; n],
            generation: 0,
            rng,
        };

        grid.reset(population)?;

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total number of cells on the board
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.view().population()
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.view().cell(x, y)
    }

    /// Read-only access to the board, for rendering
    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.cells,
            width: self.width,
            height: self.height,
            generation: self.generation,
        }
    }

    /// Overwrite a single cell. The generation counter is left alone.
    ///
    /// Panics if `(x, y)` is off the board.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.xy_from(x, y);

        self.cells[i] = cell;
    }

    /// Clear the board, then bring `alive_count` distinct cells to life, chosen uniformly at
    /// random. The generation counter goes back to 0.
    ///
    /// The count is checked before anything is touched, so on error the board is unchanged.
    pub fn reset(&mut self, alive_count: usize) -> Result<(), GridError> {
        let capacity = self.capacity();

        if alive_count > capacity {
            return Err(GridError::InvalidPopulation {
                requested: alive_count,
                capacity,
            });
        }

        self.cells.fill(Cell::Dead);

        for i in index::sample(&mut self.rng, capacity, alive_count) {
            self.cells[i] = Cell::Alive;
        }

        self.generation = 0;

        debug!(alive_count, capacity, "reset board");

        Ok(())
    }

    /// Count the alive cells among the (up to) 8 cells surrounding `(x, y)`.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width, "x is out of bounds");
        assert!(y < self.height, "y is out of bounds");

        let mut n = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };

                if nx >= self.width || ny >= self.height {
                    continue;
                }

                if self.cells[self.xy_from(nx, ny)].is_alive() {
                    n += 1;
                }
            }
        }

        n
    }

    /// Advance the board by one generation. Returns whether any cell changed.
    ///
    /// The generation counter goes up even if nothing changed. Note that an oscillating pattern
    /// changes on every step, so this never returns `false` for it.
    pub fn step(&mut self) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.xy_from(x, y);
                let next = rule::next_state(self.cells[i], self.count_alive_neighbors(x, y));

                self.scratch[i] = next;
            }
        }

        let changed = self.cells != self.scratch;

        mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;

        debug!(generation = self.generation, changed, "stepped board");

        changed
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        xy_from(self.width, self.height, x, y)
    }
}

/// Index of `(x, y)` in a row by row buffer. Panics if the position is off the board
fn xy_from(width: usize, height: usize, x: usize, y: usize) -> usize {
    assert!(x < width, "x is out of bounds");
    assert!(y < height, "y is out of bounds");

    y * width + x
}

/// A borrowed, read-only snapshot of a [`Grid`]
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    cells: &'a [Cell],
    width: usize,
    height: usize,
    generation: u64,
}

impl<'a> GridView<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[xy_from(self.width, self.height, x, y)]
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + use<'a> {
        self.cells.chunks(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}
