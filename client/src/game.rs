use snake_engine::{Board, BoardError, Shape, log_warn};

pub const MAX_BOARD_ATTEMPTS: u64 = 8;

/// Builds a board, retrying with the following seeds when the random snake
/// placement got boxed in.
pub fn start_board(shape: Shape, seed: Option<u64>) -> Result<Board, BoardError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut last_error = BoardError::NoRoomForSnake;

    for attempt in 0..MAX_BOARD_ATTEMPTS {
        match Board::new(shape, Some(base_seed.wrapping_add(attempt))) {
            Ok(board) => return Ok(board),
            Err(err @ BoardError::ShapeTooSmall { .. }) => return Err(err),
            Err(err) => {
                log_warn!("Board attempt {} failed: {}", attempt + 1, err);
                last_error = err;
            }
        }
    }

    Err(last_error)
}
