use crate::cell::Cell;

/// Neighbor counts that bring a dead cell to life. Bit `i` set means `i` neighbors cause a birth.
///
/// ```notrust
/// b3:  0_0000_1000
/// ```
const BIRTHS: u16 = 0b0_0000_1000;

/// Neighbor counts that keep a live cell alive.
///
/// ```notrust
/// s23: 0_0000_1100
/// ```
const SURVIVALS: u16 = 0b0_0000_1100;

/// The state `cell` takes in the next generation when it has `neighbors` live neighbors, under
/// the rules of Conway's Game of Life (B3/S23).
///
/// See: https://conwaylife.com/wiki/Rulestring
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    debug_assert!(neighbors <= 8, "a cell has at most 8 neighbors");

    let mask = 1 << neighbors;
    let rule = match cell {
        Cell::Alive => SURVIVALS,
        Cell::Dead => BIRTHS,
    };

    Cell::from(rule & mask == mask)
}
