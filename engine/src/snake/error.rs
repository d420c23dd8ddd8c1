use super::types::{Cell, Position, MIN_SIDE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    ShapeTooSmall { height: usize, width: usize },
    /// The random placement left no free neighbour for a body segment.
    NoRoomForSnake,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ShapeTooSmall { height, width } => write!(
                f,
                "Board of {}x{} is too small, both sides must be at least {}",
                height, width, MIN_SIDE
            ),
            BoardError::NoRoomForSnake => write!(f, "No room to seat the initial snake"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A board whose bookkeeping disagrees with itself. Never expected at
/// runtime; reported by `Board::verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    BorderBreached(Position),
    FreeCellMismatch(Position),
    SnakeCellMismatch { position: Position, found: Cell },
    SnakeNotContiguous { index: usize },
    HeadCount(usize),
    FoodCount { cell: Cell, expected: usize, found: usize },
    CellCount { expected: usize, found: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::BorderBreached(p) => {
                write!(f, "Border cell ({}, {}) is not a wall", p.row, p.col)
            }
            InvariantViolation::FreeCellMismatch(p) => write!(
                f,
                "Free-cell pool and grid disagree at ({}, {})",
                p.row, p.col
            ),
            InvariantViolation::SnakeCellMismatch { position, found } => write!(
                f,
                "Snake segment at ({}, {}) is marked {:?}",
                position.row, position.col, found
            ),
            InvariantViolation::SnakeNotContiguous { index } => {
                write!(f, "Snake segment {} is not adjacent to its predecessor", index)
            }
            InvariantViolation::HeadCount(count) => write!(f, "Found {} head cells", count),
            InvariantViolation::FoodCount {
                cell,
                expected,
                found,
            } => write!(f, "Expected {} {:?} cells, found {}", expected, cell, found),
            InvariantViolation::CellCount { expected, found } => write!(
                f,
                "Occupied plus free cells add up to {}, expected {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
