//! Discrete inputs accepted by the engine

use serde::{Deserialize, Serialize};

use super::Operation;

/// One key or button press, already decoded by an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Digit `0`-`9` or the decimal point
    Digit(char),
    /// Choose an operator
    Operation(Operation),
    /// Finalize the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last typed character
    Delete,
}

impl Command {
    /// Decodes an on-screen button caption
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "AC" | "C" => return Some(Self::Clear),
            "DEL" => return Some(Self::Delete),
            "=" => return Some(Self::Equals),
            _ => {}
        }

        let mut chars = label.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if ch.is_ascii_digit() || ch == '.' {
            Some(Self::Digit(ch))
        } else {
            Operation::from_symbol(ch).map(Self::Operation)
        }
    }

    /// Returns the caption a keypad shows for this command
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(ch) => ch.to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_digits_and_decimal() {
        for ch in '0'..='9' {
            assert_eq!(
                Command::from_label(&ch.to_string()),
                Some(Command::Digit(ch))
            );
        }
        assert_eq!(Command::from_label("."), Some(Command::Digit('.')));
    }

    #[test]
    fn test_from_label_operators() {
        assert_eq!(
            Command::from_label("×"),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            Command::from_label("÷"),
            Some(Command::Operation(Operation::Divide))
        );
    }

    #[test]
    fn test_from_label_controls() {
        assert_eq!(Command::from_label("AC"), Some(Command::Clear));
        assert_eq!(Command::from_label("C"), Some(Command::Clear));
        assert_eq!(Command::from_label("DEL"), Some(Command::Delete));
        assert_eq!(Command::from_label("="), Some(Command::Equals));
    }

    #[test]
    fn test_from_label_trims_whitespace() {
        assert_eq!(Command::from_label(" 7\n"), Some(Command::Digit('7')));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Command::from_label(""), None);
        assert_eq!(Command::from_label("x"), None);
        assert_eq!(Command::from_label("12"), None);
        assert_eq!(Command::from_label("MR"), None);
    }

    #[test]
    fn test_label_round_trips_through_from_label() {
        let commands = [
            Command::Digit('4'),
            Command::Digit('.'),
            Command::Operation(Operation::Subtract),
            Command::Equals,
            Command::Clear,
            Command::Delete,
        ];
        for command in commands {
            assert_eq!(Command::from_label(&command.label()), Some(command));
        }
    }
}
