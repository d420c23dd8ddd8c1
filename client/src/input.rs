use snake_engine::Command;

const MOVE_KEYS: [egui::Key; 6] = [
    egui::Key::ArrowUp,
    egui::Key::W,
    egui::Key::ArrowLeft,
    egui::Key::A,
    egui::Key::ArrowRight,
    egui::Key::D,
];

pub fn command_for_key(key: egui::Key) -> Option<Command> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Command::Forward),
        egui::Key::ArrowLeft | egui::Key::A => Some(Command::TurnLeft),
        egui::Key::ArrowRight | egui::Key::D => Some(Command::TurnRight),
        _ => None,
    }
}

/// At most one command per frame; the first pressed key wins.
pub fn pressed_command(input: &egui::InputState) -> Option<Command> {
    MOVE_KEYS
        .into_iter()
        .find(|&key| input.key_pressed(key))
        .and_then(command_for_key)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalAction {
    Move(Command),
    Quit,
}

pub fn parse_terminal_line(line: &str) -> Option<TerminalAction> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "w" | "f" => Some(TerminalAction::Move(Command::Forward)),
        "a" | "l" => Some(TerminalAction::Move(Command::TurnLeft)),
        "d" | "r" => Some(TerminalAction::Move(Command::TurnRight)),
        "q" | "quit" => Some(TerminalAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_and_wasd() {
        assert_eq!(command_for_key(egui::Key::ArrowUp), Some(Command::Forward));
        assert_eq!(command_for_key(egui::Key::A), Some(Command::TurnLeft));
        assert_eq!(command_for_key(egui::Key::ArrowRight), Some(Command::TurnRight));
        assert_eq!(command_for_key(egui::Key::ArrowDown), None);
        assert!(MOVE_KEYS.into_iter().all(|k| command_for_key(k).is_some()));
    }

    #[test]
    fn test_terminal_lines() {
        assert_eq!(
            parse_terminal_line(""),
            Some(TerminalAction::Move(Command::Forward))
        );
        assert_eq!(
            parse_terminal_line(" A \n"),
            Some(TerminalAction::Move(Command::TurnLeft))
        );
        assert_eq!(
            parse_terminal_line("d"),
            Some(TerminalAction::Move(Command::TurnRight))
        );
        assert_eq!(parse_terminal_line("q"), Some(TerminalAction::Quit));
        assert_eq!(parse_terminal_line("jump"), None);
    }
}
