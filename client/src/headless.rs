use std::io::{self, BufRead, Write};

use snake_engine::{Board, DeathReason, log, log_debug};

use crate::agent::{Agent, create_agent};
use crate::config::Config;
use crate::input::{TerminalAction, parse_terminal_line};

/// Plays in the terminal: an agent runs unattended, the keyboard controller
/// reads one command per line from stdin.
pub fn run(mut board: Board, config: &Config, max_ticks: u32) -> io::Result<()> {
    match create_agent(config.controller, board.seed()) {
        Some(mut agent) => {
            log!("Running {} agent for up to {} ticks", agent.name(), max_ticks);
            run_agent(&mut board, agent.as_mut(), max_ticks);
        }
        None => run_terminal(&mut board, io::stdin().lock(), io::stdout().lock())?,
    }

    println!("{}", board);
    println!("{}", summary(&board));
    Ok(())
}

pub fn run_agent(board: &mut Board, agent: &mut dyn Agent, max_ticks: u32) {
    for tick in 0..max_ticks {
        if !board.is_alive() {
            break;
        }
        let command = agent.decide(board);
        let outcome = board.apply(command);
        log_debug!("Tick {}: {:?} -> {:?}", tick + 1, command, outcome);
    }
}

pub fn run_terminal(board: &mut Board, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{}", board)?;
    writeln!(output, "w/enter: forward, a: turn left, d: turn right, q: quit")?;

    for line in input.lines() {
        let line = line?;
        match parse_terminal_line(&line) {
            Some(TerminalAction::Quit) => break,
            Some(TerminalAction::Move(command)) => {
                let outcome = board.apply(command);
                writeln!(output, "{}", board)?;
                writeln!(output, "{:?}", outcome)?;
                if !board.is_alive() {
                    break;
                }
            }
            None => writeln!(output, "Unknown command {:?}", line.trim())?,
        }
    }
    Ok(())
}

pub fn describe_death(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "hit a wall",
        DeathReason::SelfCollision => "bit itself",
        DeathReason::Starvation => "shrank away",
    }
}

pub fn summary(board: &Board) -> String {
    match board.death_reason() {
        Some(reason) => format!(
            "Game over after {} moves: the snake {} (length {})",
            board.moves_made(),
            describe_death(reason),
            board.snake_len()
        ),
        None => format!(
            "Stopped after {} moves, length {}",
            board.moves_made(),
            board.snake_len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomAgent;
    use snake_engine::Shape;

    #[test]
    fn test_terminal_session_until_quit() {
        let mut board = Board::new(Shape::new(6, 6), Some(3)).unwrap();
        let mut output = Vec::new();
        run_terminal(&mut board, "jump\nq\nw\n".as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Unknown command \"jump\""));
        assert_eq!(board.moves_made(), 0);
    }

    #[test]
    fn test_terminal_session_stops_at_death() {
        let mut board = Board::new(Shape::new(5, 5), Some(4)).unwrap();
        let script = "w\n".repeat(20);
        let mut output = Vec::new();
        run_terminal(&mut board, script.as_bytes(), &mut output).unwrap();

        assert!(!board.is_alive());
        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Dead"));
    }

    #[test]
    fn test_agent_run_respects_tick_limit() {
        let mut board = Board::new(Shape::new(20, 20), Some(1)).unwrap();
        let mut agent = RandomAgent::new(1);
        run_agent(&mut board, &mut agent, 3);
        assert!(board.moves_made() <= 3);
    }

    #[test]
    fn test_summary_mentions_reason() {
        let mut board = Board::new(Shape::new(5, 5), Some(6)).unwrap();
        while board.is_alive() {
            board.forward();
        }
        let text = summary(&board);
        assert!(text.starts_with("Game over"));
        assert!(text.contains(describe_death(board.death_reason().unwrap())));
    }
}
