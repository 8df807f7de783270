use crate::game::{GridCell, SimulationState};

/// Fill colors the game asks a surface for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Target,
    Actor,
}

/// Something the game can draw filled cells onto
pub trait RenderSurface {
    fn clear(&mut self, width: i32, height: i32);

    /// Fill a `size` x `size` square whose top-left corner is `cell`
    fn draw_filled_cell(&mut self, cell: GridCell, size: i32, color: CellColor);
}

/// Draw one complete frame: clear, the target, then every body segment.
///
/// Cells are drawn one unit smaller than the grid so neighbours stay apart.
pub fn paint<S: RenderSurface + ?Sized>(state: &SimulationState, surface: &mut S) {
    let board = state.board;
    let size = (board.cell_size - 1).max(1);

    surface.clear(board.width, board.height);
    surface.draw_filled_cell(state.target, size, CellColor::Target);
    for &segment in state.snake.body() {
        surface.draw_filled_cell(segment, size, CellColor::Actor);
    }
}

/// In-memory surface with one slot per grid cell.
///
/// Later draws win, so a segment on top of the target shows as the snake.
#[derive(Debug, Clone, PartialEq)]
pub struct CellCanvas {
    cell_size: i32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<CellColor>>,
}

impl CellCanvas {
    pub fn new(cell_size: i32) -> Self {
        Self {
            cell_size,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Color at grid column `col`, row `row`
    pub fn get(&self, col: usize, row: usize) -> Option<CellColor> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    fn index_of(&self, cell: GridCell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let col = (cell.x / self.cell_size) as usize;
        let row = (cell.y / self.cell_size) as usize;
        (col < self.cols && row < self.rows).then_some(row * self.cols + col)
    }
}

impl RenderSurface for CellCanvas {
    fn clear(&mut self, width: i32, height: i32) {
        self.cols = (width / self.cell_size).max(0) as usize;
        self.rows = (height / self.cell_size).max(0) as usize;
        self.cells.clear();
        self.cells.resize(self.cols * self.rows, None);
    }

    fn draw_filled_cell(&mut self, cell: GridCell, _size: i32, color: CellColor) {
        if let Some(index) = self.index_of(cell) {
            self.cells[index] = Some(color);
        }
    }
}
