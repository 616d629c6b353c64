//! Core calculator engine
//!
//! Error prevention: the pending operator is a closed enum and every public
//! engine operation either completes or no-ops, so no call sequence can leave
//! the engine in an invalid state.

mod command;
mod engine;
mod format;
mod operations;

pub use command::Command;
pub use engine::{CalculatorEngine, CalculatorState, ComputeOutcome, DisplayLines};
pub use format::{format_for_display, DisplayFormat};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// User-visible conditions reported by the engine
///
/// These never mean the engine is broken. Adapters decide how to present
/// them (dialog, status line, log).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Divisor operand was zero
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Cannot divide by zero!");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        let err = CalcError::Overflow;
        assert_eq!(format!("{err}"), "Overflow: result exceeds maximum value");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("divide"));
    }
}
