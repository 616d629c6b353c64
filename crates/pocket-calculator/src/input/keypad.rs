//! On-screen keypad layout
//!
//! Visual feedback: the button grid the display sits above
//!
//! Layout:
//! ```text
//! [ AC ] [DEL] [ ÷ ] [ × ]
//! [ 7  ] [ 8 ] [ 9 ] [ - ]
//! [ 4  ] [ 5 ] [ 6 ] [ + ]
//! [ 1  ] [ 2 ] [ 3 ] [ = ]
//! [ 0  ] [ . ]
//! ```

use crate::core::{Command, Operation};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The command this button sends
    pub command: Command,
    /// Element id, e.g. `btn-7` or `btn-divide`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at `(row, col)`
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        let id = match command {
            Command::Digit('.') => "btn-decimal".to_string(),
            Command::Digit(d) => format!("btn-{d}"),
            Command::Operation(op) => format!("btn-{}", op_name(op)),
            Command::Equals => "btn-equals".to_string(),
            Command::Clear => "btn-clear".to_string(),
            Command::Delete => "btn-delete".to_string(),
        };
        Self {
            command,
            id,
            row,
            col,
        }
    }

    /// Caption printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.command.label()
    }
}

fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// The standard four-function keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid columns
    pub const COLS: usize = 4;
    /// Number of grid rows
    pub const ROWS: usize = 5;

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Command::{Clear, Delete, Digit, Equals};
        let op = Command::Operation;

        let grid: [&[Command]; Self::ROWS] = [
            &[Clear, Delete, op(Operation::Divide), op(Operation::Multiply)],
            &[Digit('7'), Digit('8'), Digit('9'), op(Operation::Subtract)],
            &[Digit('4'), Digit('5'), Digit('6'), op(Operation::Add)],
            &[Digit('1'), Digit('2'), Digit('3'), Equals],
            &[Digit('0'), Digit('.')],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, commands)| {
                commands
                    .iter()
                    .enumerate()
                    .map(move |(col, &command)| KeypadButton::new(command, row, col))
            })
            .collect();
        Self { buttons }
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Button by caption
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let command = Command::from_label(label)?;
        self.find_by_command(command)
    }

    /// Button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button that sends `command`
    #[must_use]
    pub fn find_by_command(&self, command: Command) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.command == command)
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Renders the grid as text, one line per row
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        (0..Self::ROWS)
            .map(|row| {
                self.row(row)
                    .map(|b| format!("[{:^5}]", b.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
