//! One line of player input.

/// What the player typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Coordinate move text such as "e2e4", checked against the legal moves later
    Move(String),
    Undo,
    Reset,
    /// List the legal moves
    Moves,
    Help,
    Quit,
}

impl Command {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Command> {
        let word = line.split_whitespace().next()?;
        let cmd = match word.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "reset" | "new" => Command::Reset,
            "moves" | "m" => Command::Moves,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Move(other.to_string()),
        };
        Some(cmd)
    }
}

pub const HELP: &str = "\
Commands:
  e2e4       play a move (start and end square)
  moves      list the legal moves
  undo       take back your last move
  reset      start a new game
  quit       leave";

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
