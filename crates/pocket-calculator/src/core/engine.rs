//! Calculator engine: two operands, one pending operation
//!
//! Callers feed it decoded key presses and pull the display lines back
//! after every call. The engine never pushes updates and never presents
//! errors itself.

use serde::Serialize;
use tracing::{debug, trace};

use super::{CalcResult, Command, DisplayFormat, Operation};

const ZERO: &str = "0";

/// Everything the engine remembers between key presses
///
/// `pending_operation` is `None` exactly when `previous_operand` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    pending_operation: Option<Operation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: ZERO.to_string(),
            previous_operand: String::new(),
            pending_operation: None,
        }
    }
}

impl CalculatorState {
    /// The number being typed
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The operand captured when an operator was chosen, or `""`
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The operator awaiting a second operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }
}

/// What a successful `compute` did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComputeOutcome {
    /// The pending operation was applied; the value is the new current operand
    Computed(f64),
    /// No operation pending or an operand did not parse; state untouched
    NothingToCompute,
}

/// The two lines a calculator screen shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayLines {
    /// `"<previous> <operator>"`, or empty when nothing is pending
    pub previous: String,
    /// The current operand
    pub current: String,
}

/// Four-function pocket calculator engine
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    format: DisplayFormat,
}

impl CalculatorEngine {
    /// Creates an engine in the cleared state with default formatting
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that formats display lines with `format`
    #[must_use]
    pub fn with_format(format: DisplayFormat) -> Self {
        Self {
            state: CalculatorState::default(),
            format,
        }
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display formatting in use
    #[must_use]
    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Resets to `"0"` with nothing pending
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        trace!("cleared");
    }

    /// Removes the last character of the current operand
    pub fn delete(&mut self) {
        let current = &mut self.state.current_operand;
        if current.as_str() == ZERO {
            return;
        }
        current.pop();
        if current.is_empty() {
            current.push_str(ZERO);
        }
        trace!(current = %current, "deleted");
    }

    /// Appends a digit or the decimal point to the current operand
    ///
    /// A second decimal point is ignored, and a digit typed over a lone
    /// `"0"` replaces it. Any other character is ignored.
    pub fn append_digit(&mut self, symbol: char) {
        let current = &mut self.state.current_operand;
        match symbol {
            '.' if current.contains('.') => {
                debug!("ignoring second decimal point");
                return;
            }
            '.' => current.push('.'),
            '0'..='9' if current.as_str() == ZERO => {
                current.clear();
                current.push(symbol);
            }
            '0'..='9' => current.push(symbol),
            other => {
                debug!(symbol = %other, "ignoring non-digit input");
                return;
            }
        }
        trace!(current = %current, "digit appended");
    }

    /// Records `op` as the pending operation
    ///
    /// If an operation is already pending it is computed first, so
    /// `3 + 4 +` carries `7` forward. The new operator is recorded even when
    /// that implicit compute fails; the failure is still returned so the
    /// caller can show it.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.state.current_operand.is_empty() {
            return Ok(());
        }

        let implicit = if self.state.previous_operand.is_empty() {
            Ok(())
        } else {
            self.compute().map(|_| ())
        };

        let state = &mut self.state;
        state.pending_operation = Some(op);
        state.previous_operand = std::mem::replace(&mut state.current_operand, ZERO.to_string());
        trace!(previous = %state.previous_operand, op = %op, "operation chosen");

        implicit
    }

    /// Applies the pending operation to the two operands
    ///
    /// Division by zero and overflow leave the state untouched.
    pub fn compute(&mut self) -> CalcResult<ComputeOutcome> {
        let state = &mut self.state;
        let (Some(prev), Some(current)) = (
            parse_operand(&state.previous_operand),
            parse_operand(&state.current_operand),
        ) else {
            debug!(
                previous = %state.previous_operand,
                current = %state.current_operand,
                "nothing to compute"
            );
            return Ok(ComputeOutcome::NothingToCompute);
        };
        let Some(op) = state.pending_operation else {
            return Ok(ComputeOutcome::NothingToCompute);
        };

        let value = match op.apply(prev, current) {
            Ok(value) => value,
            Err(err) => {
                debug!(%err, lhs = prev, rhs = current, op = %op, "compute rejected");
                return Err(err);
            }
        };

        state.current_operand = render_number(value);
        state.previous_operand.clear();
        state.pending_operation = None;
        trace!(result = %state.current_operand, "computed");
        Ok(ComputeOutcome::Computed(value))
    }

    /// Dispatches a decoded key press
    pub fn apply(&mut self, command: Command) -> CalcResult<()> {
        match command {
            Command::Digit(symbol) => self.append_digit(symbol),
            Command::Operation(op) => self.choose_operation(op)?,
            Command::Equals => {
                self.compute()?;
            }
            Command::Clear => self.clear(),
            Command::Delete => self.delete(),
        }
        Ok(())
    }

    /// Formats an operand with this engine's display settings
    #[must_use]
    pub fn format_for_display(&self, operand: &str) -> String {
        self.format.format(operand)
    }

    /// Both display lines for the current state
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        let previous = match self.state.pending_operation {
            Some(op) => format!(
                "{} {}",
                self.format_for_display(&self.state.previous_operand),
                op.symbol()
            ),
            None => String::new(),
        };
        DisplayLines {
            previous,
            current: self.format_for_display(&self.state.current_operand),
        }
    }
}

/// Parses operand text; `None` unless it is a finite decimal number
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest round-tripping decimal form, never in exponent notation
fn render_number(value: f64) -> String {
    if value == 0.0 {
        ZERO.to_string()
    } else {
        value.to_string()
    }
}
