use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if the two directions lie on different axes
    pub fn is_orthogonal(&self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the delta (dx, dy) for one step of `cell_size` in this direction
    pub fn delta(&self, cell_size: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -cell_size),
            Direction::Down => (0, cell_size),
            Direction::Left => (-cell_size, 0),
            Direction::Right => (cell_size, 0),
        }
    }
}

/// Holds the current movement direction and applies the no-reverse rule.
///
/// Input handlers write through [`DirectionController::request`]; the tick
/// only reads [`DirectionController::current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionController {
    current: Direction,
}

impl DirectionController {
    pub fn new(initial: Direction) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    /// Accept `requested` only if it turns onto the other axis.
    ///
    /// Returns whether the direction changed. Same-axis requests (straight on
    /// or a 180-degree reversal) are ignored.
    pub fn request(&mut self, requested: Direction) -> bool {
        if self.current.is_orthogonal(requested) {
            self.current = requested;
            true
        } else {
            false
        }
    }
}
