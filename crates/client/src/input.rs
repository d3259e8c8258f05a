//! Line-based command parsing.

use game_core::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    Start,
    Stop,
    Reset,
    /// Advance every monster once.
    Tick,
    Help,
    Quit,
}

/// Parses one input line; `None` for anything unrecognised.
pub fn parse(line: &str) -> Option<InputCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => InputCommand::Move(Direction::North),
        "a" | "left" => InputCommand::Move(Direction::West),
        "s" | "down" => InputCommand::Move(Direction::South),
        "d" | "right" => InputCommand::Move(Direction::East),
        "start" => InputCommand::Start,
        "stop" => InputCommand::Stop,
        "reset" => InputCommand::Reset,
        "tick" => InputCommand::Tick,
        "help" | "?" => InputCommand::Help,
        "quit" | "q" | "exit" => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}

pub const HELP: &str = "\
commands:
  w/a/s/d   move north/west/south/east
  start     start or resume the game
  stop      pause the game
  reset     reload the level
  tick      advance every monster once
  quit      leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_directions() {
        assert_eq!(parse("w"), Some(InputCommand::Move(Direction::North)));
        assert_eq!(parse(" A "), Some(InputCommand::Move(Direction::West)));
        assert_eq!(parse("down"), Some(InputCommand::Move(Direction::South)));
        assert_eq!(parse("d\n"), Some(InputCommand::Move(Direction::East)));
    }

    #[test]
    fn words_and_garbage() {
        assert_eq!(parse("Start"), Some(InputCommand::Start));
        assert_eq!(parse("q"), Some(InputCommand::Quit));
        assert_eq!(parse("jump"), None);
        assert_eq!(parse(""), None);
    }
}
