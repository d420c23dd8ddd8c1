pub mod config;
pub mod logger;
pub mod rng;
pub mod snake;

pub use rng::BoardRng;
pub use snake::{
    Board, BoardError, BoardStatus, Cell, Command, DeathReason, Direction, FreeCells, Grid,
    InvariantViolation, MoveOutcome, Position, Shape, Snake, View,
};
