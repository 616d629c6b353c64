//! Unified calculator driver
//!
//! **Write the behaviour checks once, run them against every adapter.**
//!
//! Balanced testing: the keyboard and the keypad reach the engine through
//! different decoders, and both must produce identical displays.

use crate::core::{CalcError, CalcResult, CalculatorEngine, Command, DisplayLines, Operation};
use crate::input::Keypad;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses whatever key or button produces `command`
    fn press(&mut self, command: Command) -> CalcResult<()>;

    /// Current display lines
    fn display(&self) -> DisplayLines;

    /// The engine behind the adapter
    fn engine(&self) -> &CalculatorEngine;

    /// Resets the calculator
    fn clear(&mut self) {
        // clear never reports anything
        let _ = self.press(Command::Clear);
    }
}

/// Driver that clicks keypad buttons by caption
#[derive(Debug, Default)]
pub struct KeypadDriver {
    engine: CalculatorEngine,
    keypad: Keypad,
}

impl KeypadDriver {
    /// Creates a driver with a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            keypad: Keypad::new(),
        }
    }

    /// Clicks the button with the given caption; unknown captions do nothing
    pub fn click(&mut self, label: &str) -> CalcResult<()> {
        match self.keypad.find_by_label(label) {
            Some(button) => self.engine.apply(button.command),
            None => Ok(()),
        }
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, command: Command) -> CalcResult<()> {
        self.click(&command.label())
    }

    fn display(&self) -> DisplayLines {
        self.engine.display()
    }

    fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

/// Keyboard driver
#[cfg(feature = "tui")]
pub mod keyboard_driver {
    use super::{CalcResult, CalculatorDriver, CalculatorEngine, Command, DisplayLines};
    use crate::input::{InputHandler, KeyAction};
    use crossterm::event::KeyEvent;

    /// Driver that sends crossterm key events through the input handler
    #[derive(Debug, Default)]
    pub struct KeyboardDriver {
        engine: CalculatorEngine,
        handler: InputHandler,
    }

    impl KeyboardDriver {
        /// Creates a driver with a fresh engine
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Sends one key event; `Quit` and unmapped keys do nothing
        pub fn send_key(&mut self, event: KeyEvent) -> CalcResult<()> {
            match self.handler.handle_key(event) {
                KeyAction::Press(command) => self.engine.apply(command),
                KeyAction::Quit | KeyAction::None => Ok(()),
            }
        }
    }

    impl CalculatorDriver for KeyboardDriver {
        fn press(&mut self, command: Command) -> CalcResult<()> {
            match InputHandler::key_for(command) {
                Some(event) => self.send_key(event),
                None => Ok(()),
            }
        }

        fn display(&self) -> DisplayLines {
            self.engine.display()
        }

        fn engine(&self) -> &CalculatorEngine {
            &self.engine
        }
    }
}

#[cfg(feature = "tui")]
pub use keyboard_driver::KeyboardDriver;

// ===== Unified Checks =====
// These work with ANY CalculatorDriver implementation

fn type_digits<D: CalculatorDriver>(driver: &mut D, digits: &str) {
    for d in digits.chars() {
        assert_eq!(
            driver.press(Command::Digit(d)),
            Ok(()),
            "digit entry never reports"
        );
    }
}

fn choose<D: CalculatorDriver>(driver: &mut D, op: Operation) {
    assert_eq!(
        driver.press(Command::Operation(op)),
        Ok(()),
        "operator choice should not report here"
    );
}

/// `12 + 8 =` shows `20` with nothing pending
pub fn verify_basic_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    type_digits(driver, "12");
    choose(driver, Operation::Add);
    type_digits(driver, "8");
    assert_eq!(driver.press(Command::Equals), Ok(()), "12 + 8 computes");

    let state = driver.engine().state();
    assert_eq!(state.current_operand(), "20");
    assert_eq!(state.previous_operand(), "");
    assert_eq!(state.pending_operation(), None);
    assert_eq!(
        driver.display(),
        DisplayLines {
            previous: String::new(),
            current: "20".to_string(),
        }
    );
}

/// `3 + 4 -` carries `7` forward as the previous operand
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    type_digits(driver, "3");
    choose(driver, Operation::Add);
    type_digits(driver, "4");
    choose(driver, Operation::Subtract);

    let state = driver.engine().state();
    assert_eq!(state.previous_operand(), "7");
    assert_eq!(state.pending_operation(), Some(Operation::Subtract));
    assert_eq!(state.current_operand(), "0");
    assert_eq!(driver.display().previous, "7 -");
}

/// `5 ÷ 0 =` reports once and changes nothing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    type_digits(driver, "5");
    choose(driver, Operation::Divide);
    type_digits(driver, "0");

    let before = driver.engine().state().clone();
    assert_eq!(driver.press(Command::Equals), Err(CalcError::DivisionByZero));
    assert_eq!(driver.engine().state(), &before);
    assert_eq!(driver.display().previous, "5 ÷");
}

/// A leading zero is replaced, and `.` after it gives `0.`
pub fn verify_leading_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    type_digits(driver, "0");
    assert_eq!(driver.engine().state().current_operand(), "0");
    type_digits(driver, ".");
    assert_eq!(driver.engine().state().current_operand(), "0.");
    assert_eq!(driver.display().current, "0.");
}

/// Delete trims the entry and never empties it
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let before = driver.engine().state().clone();
    assert_eq!(driver.press(Command::Delete), Ok(()), "delete never reports");
    assert_eq!(driver.engine().state(), &before);

    type_digits(driver, "42");
    assert_eq!(driver.press(Command::Delete), Ok(()), "delete never reports");
    assert_eq!(driver.press(Command::Delete), Ok(()), "delete never reports");
    assert_eq!(driver.engine().state().current_operand(), "0");
}

/// Display lines group thousands and keep fractions verbatim
pub fn verify_display_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    type_digits(driver, "1234567.89");
    assert_eq!(driver.display().current, "1,234,567.89");
    choose(driver, Operation::Multiply);
    assert_eq!(
        driver.display(),
        DisplayLines {
            previous: "1,234,567.89 ×".to_string(),
            current: "0".to_string(),
        }
    );
}

/// Complete verification suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_round_trip(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_leading_zero(driver);
    verify_delete(driver);
    verify_display_formatting(driver);
}
