//! Pocket Calculator - four-function keypad calculator engine
//!
//! A small state machine: digits accumulate into the current operand, an
//! operator captures it as the previous operand, and equals folds the two.
//! Adapters (keyboard, keypad) decode raw input into [`core::Command`]s
//! and pull the two display lines back after every press.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.append_digit('1');
//! calc.append_digit('2');
//! calc.choose_operation(Operation::Add).unwrap();
//! calc.append_digit('8');
//! calc.compute().unwrap();
//! assert_eq!(calc.display().current, "20");
//!
//! // Division by zero is reported, not applied
//! calc.choose_operation(Operation::Divide).unwrap();
//! assert_eq!(calc.compute(), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.display().previous, "20 ÷");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod input;

#[cfg(feature = "tui")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, Verbosity};
    pub use crate::core::{
        format_for_display, CalcError, CalcResult, CalculatorEngine, CalculatorState, Command,
        ComputeOutcome, DisplayFormat, DisplayLines, Operation,
    };
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::input::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::KeyboardDriver;
    #[cfg(feature = "tui")]
    pub use crate::input::{InputHandler, KeyAction};
}
