use std::fmt;

use super::body::Snake;
use super::error::{BoardError, InvariantViolation};
use super::free_cells::FreeCells;
use super::grid::Grid;
use super::types::{
    BoardStatus, Cell, Command, DeathReason, Direction, MIN_SIDE, MoveOutcome, Position, Shape,
};
use super::view::View;
use crate::rng::BoardRng;
use crate::{log, log_debug};

pub const GOOD_FOOD_COUNT: usize = 2;
pub const BAD_FOOD_COUNT: usize = 1;

/// A single-snake arena. Mutated only through move commands; once the snake
/// dies the board is terminal and every command returns `MoveOutcome::Dead`.
///
/// A fatal collision leaves grid, snake and free cells exactly as they were
/// before the move, so the head keeps its `Head` marker.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    free_cells: FreeCells,
    snake: Snake,
    direction: Direction,
    status: BoardStatus,
    good_food: usize,
    bad_food: usize,
    moves_made: u32,
    rng: BoardRng,
}

impl Board {
    /// Builds a board with a random seed unless one is given.
    pub fn new(shape: Shape, seed: Option<u64>) -> Result<Self, BoardError> {
        let rng = seed.map_or_else(BoardRng::from_random, BoardRng::new);
        Self::with_rng(shape, rng)
    }

    pub fn with_rng(shape: Shape, mut rng: BoardRng) -> Result<Self, BoardError> {
        if shape.height < MIN_SIDE || shape.width < MIN_SIDE {
            return Err(BoardError::ShapeTooSmall {
                height: shape.height,
                width: shape.width,
            });
        }

        let mut grid = Grid::walled(shape);
        let mut free_cells = FreeCells::from_grid(&grid);
        let (snake, direction) = seat_snake(&mut grid, &mut free_cells, &mut rng)?;

        let mut board = Self {
            grid,
            free_cells,
            snake,
            direction,
            status: BoardStatus::Alive,
            good_food: 0,
            bad_food: 0,
            moves_made: 0,
            rng,
        };
        board.restock_food();

        log_debug!(
            "Board {}x{} ready (seed {}), facing {:?}",
            shape.height,
            shape.width,
            board.rng.seed(),
            board.direction
        );
        Ok(board)
    }

    pub fn forward(&mut self) -> MoveOutcome {
        self.apply(Command::Forward)
    }

    pub fn turn_left(&mut self) -> MoveOutcome {
        self.apply(Command::TurnLeft)
    }

    pub fn turn_right(&mut self) -> MoveOutcome {
        self.apply(Command::TurnRight)
    }

    pub fn apply(&mut self, command: Command) -> MoveOutcome {
        if !self.is_alive() {
            return MoveOutcome::Dead;
        }

        let direction = command.apply_to(self.direction);
        let outcome = self.advance(direction);

        if cfg!(debug_assertions)
            && let Err(violation) = self.verify()
        {
            panic!("Board invariant broken after {:?}: {}", command, violation);
        }
        outcome
    }

    fn advance(&mut self, direction: Direction) -> MoveOutcome {
        // A live snake always has a head.
        let Some(head) = self.snake.head() else {
            return MoveOutcome::Dead;
        };

        let Some((target, previous)) = head
            .step(direction)
            .and_then(|p| self.grid.get(p).map(|cell| (p, cell)))
        else {
            self.die(DeathReason::WallCollision, head);
            return MoveOutcome::Wall;
        };

        match previous {
            Cell::Wall => {
                self.die(DeathReason::WallCollision, target);
                return MoveOutcome::Wall;
            }
            Cell::Head | Cell::Body => {
                self.die(DeathReason::SelfCollision, target);
                return MoveOutcome::Body;
            }
            Cell::Empty => {
                let claimed = self.free_cells.remove(target);
                debug_assert!(claimed, "empty cell missing from the free-cell pool");
                self.move_head(head, target);
                self.clear_tail();
            }
            Cell::GoodFood => {
                self.good_food -= 1;
                self.move_head(head, target);
                log_debug!(
                    "Ate good food at ({}, {}), length {}",
                    target.row,
                    target.col,
                    self.snake.len()
                );
            }
            Cell::BadFood => {
                self.bad_food -= 1;
                self.move_head(head, target);
                self.clear_tail();
                self.clear_tail();
                log_debug!(
                    "Ate bad food at ({}, {}), length {}",
                    target.row,
                    target.col,
                    self.snake.len()
                );
            }
        }

        self.moves_made += 1;

        if self.snake.is_empty() {
            self.die(DeathReason::Starvation, target);
            return MoveOutcome::from(previous);
        }

        self.direction = direction;
        self.restock_food();
        MoveOutcome::from(previous)
    }

    fn move_head(&mut self, from: Position, to: Position) {
        self.grid.set(from, Cell::Body);
        self.grid.set(to, Cell::Head);
        self.snake.push_head(to);
    }

    fn clear_tail(&mut self) {
        if let Some(tail) = self.snake.pop_tail() {
            self.grid.set(tail, Cell::Empty);
            self.free_cells.insert(tail);
        }
    }

    fn die(&mut self, reason: DeathReason, at: Position) {
        self.status = BoardStatus::Dead(reason);
        log!(
            "Snake died ({:?}) at ({}, {}) after {} moves, length {}",
            reason,
            at.row,
            at.col,
            self.moves_made,
            self.snake.len()
        );
    }

    /// Tops food back up to its quota. Whatever cannot be placed for lack of
    /// free cells is retried after the next live move.
    fn restock_food(&mut self) {
        while self.good_food < GOOD_FOOD_COUNT {
            if !self.spawn(Cell::GoodFood) {
                return;
            }
            self.good_food += 1;
        }
        while self.bad_food < BAD_FOOD_COUNT {
            if !self.spawn(Cell::BadFood) {
                return;
            }
            self.bad_food += 1;
        }
    }

    fn spawn(&mut self, item: Cell) -> bool {
        match self.free_cells.take_random(&mut self.rng) {
            Some(pos) => {
                self.grid.set(pos, item);
                log_debug!("Spawned {:?} at ({}, {})", item, pos.row, pos.col);
                true
            }
            None => {
                log_debug!("No free cell left for {:?}, spawn deferred", item);
                false
            }
        }
    }

    pub fn state(&self) -> &Grid {
        &self.grid
    }

    /// `None` once the snake has no segments left.
    pub fn view(&self) -> Option<View> {
        let head = self.snake.head()?;
        Some(View {
            head,
            row: self.grid.row(head.row).to_vec(),
            column: self.grid.column(head.col),
        })
    }

    pub fn is_alive(&self) -> bool {
        self.status == BoardStatus::Alive
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        match self.status {
            BoardStatus::Alive => None,
            BoardStatus::Dead(reason) => Some(reason),
        }
    }

    /// Current heading; `None` once the board is terminal.
    pub fn direction(&self) -> Option<Direction> {
        self.is_alive().then_some(self.direction)
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.head()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn free_cells(&self) -> &FreeCells {
        &self.free_cells
    }

    pub fn food_count(&self, cell: Cell) -> usize {
        match cell {
            Cell::GoodFood => self.good_food,
            Cell::BadFood => self.bad_food,
            _ => 0,
        }
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.grid.height() - 2, self.grid.width() - 2)
    }

    /// Full consistency check of grid, snake, free cells and food counters.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let pos = Position::new(row, col);
                let cell = self.grid.get(pos).unwrap_or(Cell::Wall);
                if self.grid.is_border(pos) && cell != Cell::Wall {
                    return Err(InvariantViolation::BorderBreached(pos));
                }
                if (cell == Cell::Empty) != self.free_cells.contains(pos) {
                    return Err(InvariantViolation::FreeCellMismatch(pos));
                }
            }
        }

        for (index, &pos) in self.snake.iter().enumerate() {
            let expected = if index == 0 { Cell::Head } else { Cell::Body };
            let found = self.grid.get(pos).unwrap_or(Cell::Wall);
            if found != expected {
                return Err(InvariantViolation::SnakeCellMismatch {
                    position: pos,
                    found,
                });
            }
        }
        if let Some(index) = self.snake.first_gap() {
            return Err(InvariantViolation::SnakeNotContiguous { index });
        }

        let heads = self.grid.count(Cell::Head);
        if heads != usize::from(!self.snake.is_empty()) {
            return Err(InvariantViolation::HeadCount(heads));
        }

        for (cell, tracked, quota) in [
            (Cell::GoodFood, self.good_food, GOOD_FOOD_COUNT),
            (Cell::BadFood, self.bad_food, BAD_FOOD_COUNT),
        ] {
            let found = self.grid.count(cell);
            if found != tracked {
                return Err(InvariantViolation::FoodCount {
                    cell,
                    expected: tracked,
                    found,
                });
            }
            if self.is_alive() && !self.free_cells.is_empty() && found < quota {
                return Err(InvariantViolation::FoodCount {
                    cell,
                    expected: quota,
                    found,
                });
            }
        }

        let occupied = self.free_cells.len()
            + self.grid.count(Cell::Head)
            + self.grid.count(Cell::Body)
            + self.good_food
            + self.bad_food;
        let interior = self.shape().interior_cells();
        if occupied != interior || self.grid.count(Cell::Body) + heads != self.snake.len() {
            return Err(InvariantViolation::CellCount {
                expected: interior,
                found: occupied,
            });
        }

        Ok(())
    }

    /// Board from a text layout using grid tokens (`.` for empty) and an
    /// explicit head-first segment list.
    #[cfg(test)]
    pub(crate) fn from_layout(
        rows: &[&str],
        segments: &[(usize, usize)],
        direction: Direction,
        seed: u64,
    ) -> Self {
        let cells = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|token| Cell::from_token(token).expect("unknown layout token"))
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(cells);
        let free_cells = FreeCells::from_grid(&grid);
        Self {
            good_food: grid.count(Cell::GoodFood),
            bad_food: grid.count(Cell::BadFood),
            snake: Snake::from_segments(segments.iter().map(|&(r, c)| Position::new(r, c))),
            grid,
            free_cells,
            direction,
            status: BoardStatus::Alive,
            moves_made: 0,
            rng: BoardRng::new(seed),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

fn seat_snake(
    grid: &mut Grid,
    free_cells: &mut FreeCells,
    rng: &mut BoardRng,
) -> Result<(Snake, Direction), BoardError> {
    let head = free_cells
        .take_random(rng)
        .ok_or(BoardError::NoRoomForSnake)?;
    grid.set(head, Cell::Head);
    let mut snake = Snake::new(head);

    let neck = claim_free_neighbor(grid, free_cells, head, rng)?;
    snake.push_tail(neck);
    let tail = claim_free_neighbor(grid, free_cells, neck, rng)?;
    snake.push_tail(tail);

    // Facing away from the body.
    let direction = Direction::between(neck, head).ok_or(BoardError::NoRoomForSnake)?;
    Ok((snake, direction))
}

fn claim_free_neighbor(
    grid: &mut Grid,
    free_cells: &mut FreeCells,
    pos: Position,
    rng: &mut BoardRng,
) -> Result<Position, BoardError> {
    let candidates: Vec<Position> = pos
        .neighbors()
        .filter(|&p| grid.get(p) == Some(Cell::Empty))
        .collect();
    let chosen = *rng.pick(&candidates).ok_or(BoardError::NoRoomForSnake)?;
    free_cells.remove(chosen);
    grid.set(chosen, Cell::Body);
    Ok(chosen)
}
