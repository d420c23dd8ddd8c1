use snake_engine::{Board, BoardRng, Cell, Command, Direction, View};

use crate::config::ControllerKind;

/// Automated player. Sees the board the same way a renderer does and answers
/// with exactly one command per tick.
pub trait Agent {
    fn name(&self) -> &'static str;
    fn decide(&mut self, board: &Board) -> Command;
}

pub fn create_agent(kind: ControllerKind, seed: u64) -> Option<Box<dyn Agent>> {
    match kind {
        ControllerKind::Keyboard => None,
        ControllerKind::Random => Some(Box::new(RandomAgent::new(seed))),
        ControllerKind::LineOfSight => Some(Box::new(LineOfSightAgent)),
    }
}

pub struct RandomAgent {
    rng: BoardRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BoardRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, _board: &Board) -> Command {
        *self.rng.pick(&Command::ALL).unwrap_or(&Command::Forward)
    }
}

/// Reads the row and column through the head and steers toward good food it
/// can see, away from anything that would end the game next tick.
pub struct LineOfSightAgent;

impl LineOfSightAgent {
    fn score(view: &View, heading: Direction) -> i32 {
        match view.first_obstacle(heading) {
            Some((cell, 1)) if cell.is_deadly() => -100,
            Some((Cell::BadFood, 1)) => -10,
            Some((Cell::GoodFood, distance)) => 100 - distance as i32,
            Some((_, distance)) => distance as i32,
            None => 0,
        }
    }
}

impl Agent for LineOfSightAgent {
    fn name(&self) -> &'static str {
        "line-of-sight"
    }

    fn decide(&mut self, board: &Board) -> Command {
        let (Some(view), Some(direction)) = (board.view(), board.direction()) else {
            return Command::Forward;
        };

        let mut best = (Command::Forward, Self::score(&view, direction));
        for command in [Command::TurnLeft, Command::TurnRight] {
            let score = Self::score(&view, command.apply_to(direction));
            if score > best.1 {
                best = (command, score);
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::Shape;

    fn next_cell(board: &Board, command: Command) -> Option<Cell> {
        let direction = command.apply_to(board.direction()?);
        board.state().get(board.head()?.step(direction)?)
    }

    #[test]
    fn test_keyboard_has_no_agent() {
        assert!(create_agent(ControllerKind::Keyboard, 1).is_none());
        assert_eq!(
            create_agent(ControllerKind::Random, 1).unwrap().name(),
            "random"
        );
    }

    #[test]
    fn test_random_agent_is_deterministic_per_seed() {
        let board = Board::new(Shape::new(6, 6), Some(1)).unwrap();
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(5);
        for _ in 0..30 {
            assert_eq!(a.decide(&board), b.decide(&board));
        }
    }

    #[test]
    fn test_line_of_sight_avoids_fatal_moves_when_possible() {
        for seed in 0..20 {
            let mut board = Board::new(Shape::new(8, 8), Some(seed)).unwrap();
            let mut agent = LineOfSightAgent;
            for _ in 0..200 {
                if !board.is_alive() {
                    break;
                }
                let command = agent.decide(&board);
                let has_safe_option = Command::ALL
                    .into_iter()
                    .any(|c| next_cell(&board, c).is_some_and(|cell| !cell.is_deadly()));
                if has_safe_option {
                    let chosen = next_cell(&board, command).unwrap();
                    assert!(!chosen.is_deadly(), "seed {} walked into {:?}", seed, chosen);
                }
                board.apply(command);
            }
        }
    }

    #[test]
    fn test_line_of_sight_on_dead_board_goes_forward() {
        let mut board = Board::new(Shape::new(5, 5), Some(2)).unwrap();
        while board.is_alive() {
            board.forward();
        }
        assert_eq!(LineOfSightAgent.decide(&board), Command::Forward);
    }
}
