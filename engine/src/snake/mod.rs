mod board;
mod body;
mod error;
mod free_cells;
mod grid;
mod types;
mod view;

pub use board::{BAD_FOOD_COUNT, Board, GOOD_FOOD_COUNT};
pub use body::Snake;
pub use error::{BoardError, InvariantViolation};
pub use free_cells::FreeCells;
pub use grid::Grid;
pub use types::{
    BoardStatus, Cell, Command, DeathReason, Direction, MAX_SIDE, MIN_SIDE, MoveOutcome, Position,
    Shape,
};
pub use view::View;
