//! Input adapters: keyboard keys and keypad buttons to engine commands
//!
//! Adapters only decode. Every decision about what a press means for the
//! calculator state lives in the engine.

#[cfg(feature = "tui")]
mod keyboard;
mod keypad;

#[cfg(feature = "tui")]
pub use keyboard::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton};
