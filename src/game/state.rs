use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::config::GameConfig;
use super::direction::{Direction, DirectionController};
use super::picker::CellPicker;

/// A cell-aligned position on the board, in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board geometry used for wraparound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            width: config.width(),
            height: config.height(),
        }
    }

    /// Wrap a cell that stepped at most one cell off an edge back onto the board
    pub fn wrap(&self, cell: GridCell) -> GridCell {
        GridCell::new(
            wrap_axis(cell.x, self.width, self.cell_size),
            wrap_axis(cell.y, self.height, self.cell_size),
        )
    }
}

fn wrap_axis(value: i32, extent: i32, cell_size: i32) -> i32 {
    if value < 0 {
        extent - cell_size
    } else if value >= extent {
        0
    } else {
        value
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, most recent (the head) at the front
    body: VecDeque<GridCell>,
    /// Where the head sits before the first tick after a (re)start
    spawn: GridCell,
    /// Length the body grows to
    target_length: usize,
}

impl Snake {
    /// A freshly spawned snake with no body yet
    pub fn new(spawn: GridCell, target_length: usize) -> Self {
        Self {
            body: VecDeque::new(),
            spawn,
            target_length,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_cells(
        spawn: GridCell,
        cells: impl IntoIterator<Item = GridCell>,
        target_length: usize,
    ) -> Self {
        Self {
            body: cells.into_iter().collect(),
            spawn,
            target_length,
        }
    }

    /// Get the head position
    pub fn head(&self) -> GridCell {
        self.body.front().copied().unwrap_or(self.spawn)
    }

    pub fn body(&self) -> &VecDeque<GridCell> {
        &self.body
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True between a (re)start and the first tick
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Push a new head and drop the oldest segments beyond the target length
    fn push_head(&mut self, head: GridCell) {
        self.body.push_front(head);
        self.body.truncate(self.target_length);
    }

    fn grow(&mut self) {
        self.target_length += 1;
    }

    /// True if any two segments share a cell
    pub fn overlaps_itself(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(i, cell)| self.body.iter().skip(i + 1).any(|later| later == cell))
    }
}

/// What `resolve` found in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// A segment landed on the target
    pub grew: bool,
    /// The snake ran into itself and the state was reinitialised
    pub reset: bool,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub snake: Snake,
    pub target: GridCell,
    pub controller: DirectionController,
    pub board: Board,
    start: GridCell,
    initial_direction: Direction,
    initial_length: usize,
}

impl SimulationState {
    /// Create the launch state with the target at `target`
    pub fn new(config: &GameConfig, target: GridCell) -> Self {
        Self {
            snake: Snake::new(config.start, config.initial_length),
            target,
            controller: DirectionController::new(config.initial_direction),
            board: Board::from_config(config),
            start: config.start,
            initial_direction: config.initial_direction,
            initial_length: config.initial_length,
        }
    }

    pub fn direction(&self) -> Direction {
        self.controller.current()
    }

    /// Move the head one cell in the current direction, wrapping at the edges
    pub fn advance(&mut self) {
        let (dx, dy) = self.direction().delta(self.board.cell_size);
        let head = self.board.wrap(self.snake.head().moved_by(dx, dy));
        self.snake.push_head(head);
    }

    /// Apply growth and self-collision for the body produced by `advance`.
    ///
    /// Every segment is checked against the target, not only the head. At
    /// most one growth is applied per tick.
    pub fn resolve(&mut self, picker: &mut CellPicker) -> Resolution {
        let mut resolution = Resolution::default();

        if self.snake.body.contains(&self.target) {
            self.snake.grow();
            self.target = picker.pick_cell();
            resolution.grew = true;
        }

        if self.snake.overlaps_itself() {
            self.reset(picker);
            resolution.reset = true;
        }

        resolution
    }

    /// Reinitialise the snake and direction, and move the target
    pub fn reset(&mut self, picker: &mut CellPicker) {
        self.snake = Snake::new(self.start, self.initial_length);
        self.controller = DirectionController::new(self.initial_direction);
        self.target = picker.pick_cell();
    }
}
