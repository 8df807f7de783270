use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::GridCell;

/// Picks uniformly random cells on the board.
///
/// No attempt is made to avoid the snake's body or the previous target.
pub struct CellPicker {
    cols: i32,
    rows: i32,
    cell_size: i32,
    rng: StdRng,
}

impl CellPicker {
    pub fn new(cols: i32, rows: i32, cell_size: i32) -> Self {
        Self::with_rng(cols, rows, cell_size, StdRng::from_entropy())
    }

    /// Deterministic picker for reproducible runs and tests
    pub fn seeded(cols: i32, rows: i32, cell_size: i32, seed: u64) -> Self {
        Self::with_rng(cols, rows, cell_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cols: i32, rows: i32, cell_size: i32, rng: StdRng) -> Self {
        Self {
            cols,
            rows,
            cell_size,
            rng,
        }
    }

    pub fn pick_cell(&mut self) -> GridCell {
        let i = self.rng.gen_range(0..self.cols);
        let j = self.rng.gen_range(0..self.rows);
        GridCell::new(i * self.cell_size, j * self.cell_size)
    }
}
