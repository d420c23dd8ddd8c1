use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MIN_SIDE: usize = 5;
pub const MAX_SIDE: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Head,
    Body,
    GoodFood,
    BadFood,
}

impl Cell {
    /// One-character token used by the text rendering of a grid.
    pub fn token(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => 'W',
            Cell::Head => 'H',
            Cell::Body => 'S',
            Cell::GoodFood => 'G',
            Cell::BadFood => 'R',
        }
    }

    pub fn from_token(token: char) -> Option<Self> {
        match token {
            ' ' | '.' => Some(Cell::Empty),
            'W' | '#' => Some(Cell::Wall),
            'H' => Some(Cell::Head),
            'S' => Some(Cell::Body),
            'G' => Some(Cell::GoodFood),
            'R' => Some(Cell::BadFood),
            _ => None,
        }
    }

    pub fn is_food(&self) -> bool {
        matches!(self, Cell::GoodFood | Cell::BadFood)
    }

    pub fn is_snake(&self) -> bool {
        matches!(self, Cell::Head | Cell::Body)
    }

    /// Walls and snake segments kill on contact.
    pub fn is_deadly(&self) -> bool {
        matches!(self, Cell::Wall | Cell::Head | Cell::Body)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `None` when the step would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        Some(Position::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }

    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Rows grow downwards, so `Up` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Rotation by +90°, what a right turn does.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// (row, col) offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Direction of the single step leading from `from` to `to`.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| from.step(d) == Some(to))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Forward, Command::TurnLeft, Command::TurnRight];

    pub fn apply_to(self, direction: Direction) -> Direction {
        match self {
            Command::Forward => direction,
            Command::TurnLeft => direction.counter_clockwise(),
            Command::TurnRight => direction.clockwise(),
        }
    }
}

/// What a move found in the destination cell, or `Dead` when the board had
/// already ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Empty,
    GoodFood,
    BadFood,
    Wall,
    Body,
    Dead,
}

impl From<Cell> for MoveOutcome {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => MoveOutcome::Empty,
            Cell::Wall => MoveOutcome::Wall,
            Cell::Head | Cell::Body => MoveOutcome::Body,
            Cell::GoodFood => MoveOutcome::GoodFood,
            Cell::BadFood => MoveOutcome::BadFood,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    Starvation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardStatus {
    Alive,
    Dead(DeathReason),
}

/// Interior size of the arena, walls excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    pub fn interior_cells(&self) -> usize {
        self.height * self.width
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl Validate for Shape {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.height) {
            return Err(format!(
                "Board height must be between {} and {}",
                MIN_SIDE, MAX_SIDE
            ));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&self.width) {
            return Err(format!(
                "Board width must be between {} and {}",
                MIN_SIDE, MAX_SIDE
            ));
        }
        Ok(())
    }
}
