//! Keyboard input handling
//!
//! Error prevention: key events are decoded into a closed set of actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Command, Operation};

/// What a key event asks the front end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the engine
    Press(Command),
    /// Leave the application
    Quit,
    /// Ignored key
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let command = match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Enter => Some(Command::Equals),
            KeyCode::Backspace => Some(Command::Delete),
            KeyCode::Esc => Some(Command::Clear),
            _ => None,
        };
        command.map_or(KeyAction::None, KeyAction::Press)
    }

    /// Maps a typed character to a command
    ///
    /// Uses the keyboard spellings of the operators: `*` multiplies and `/`
    /// divides.
    #[must_use]
    pub fn handle_char(c: char) -> Option<Command> {
        match c {
            '0'..='9' | '.' => Some(Command::Digit(c)),
            '+' => Some(Command::Operation(Operation::Add)),
            '-' => Some(Command::Operation(Operation::Subtract)),
            '*' => Some(Command::Operation(Operation::Multiply)),
            '/' => Some(Command::Operation(Operation::Divide)),
            '=' => Some(Command::Equals),
            _ => None,
        }
    }

    /// The key event that produces `command`
    ///
    /// Digits other than `0`-`9` and `.` have no key.
    #[must_use]
    pub fn key_for(command: Command) -> Option<KeyEvent> {
        let code = match command {
            Command::Digit(c @ ('0'..='9' | '.')) => KeyCode::Char(c),
            Command::Digit(_) => return None,
            Command::Operation(Operation::Add) => KeyCode::Char('+'),
            Command::Operation(Operation::Subtract) => KeyCode::Char('-'),
            Command::Operation(Operation::Multiply) => KeyCode::Char('*'),
            Command::Operation(Operation::Divide) => KeyCode::Char('/'),
            Command::Equals => KeyCode::Enter,
            Command::Clear => KeyCode::Esc,
            Command::Delete => KeyCode::Backspace,
        };
        Some(KeyEvent::new(code, KeyModifiers::NONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Command::Digit(c))
            );
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(Command::Digit('.'))
        );
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('/', Operation::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(Command::Operation(op))
            );
        }
    }

    #[test]
    fn test_handle_shifted_plus() {
        // '+' arrives with SHIFT on most layouts
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Press(Command::Operation(Operation::Add))
        );
    }

    // ===== Control key tests =====

    #[test]
    fn test_handle_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(Command::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(Command::Equals)
        );
    }

    #[test]
    fn test_handle_backspace_and_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Press(Command::Delete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Press(Command::Clear)
        );
    }

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('1'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_handle_unmapped_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('%'),
            KeyCode::Char(' '),
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_repeat_events_accepted() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Press(Command::Digit('5'))
        );
    }

    // ===== key_for tests =====

    #[test]
    fn test_key_for_round_trips_through_handle_key() {
        let handler = InputHandler::new();
        let mut commands: Vec<Command> = ('0'..='9').map(Command::Digit).collect();
        commands.push(Command::Digit('.'));
        commands.extend(Operation::ALL.map(Command::Operation));
        commands.extend([Command::Equals, Command::Clear, Command::Delete]);

        for command in commands {
            let event = InputHandler::key_for(command).unwrap();
            assert_eq!(handler.handle_key(event), KeyAction::Press(command));
        }
    }

    #[test]
    fn test_key_for_invalid_digit() {
        assert!(InputHandler::key_for(Command::Digit('x')).is_none());
    }
}
