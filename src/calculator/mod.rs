//! Calculator engine.
//!
//! This module provides:
//! - The fixed operation table, keyed by button symbol
//! - The accumulator engine with its pending binary operation
//! - Result formatting for display and clipboard
//! - Copying results to the clipboard

mod brain;
mod clipboard;
mod formatting;
mod operation;

pub use brain::CalculatorBrain;
pub use clipboard::copy_to_clipboard;
pub use formatting::{format_clipboard, format_display};
pub use operation::{BinaryFunction, Operation, UnaryFunction, lookup, symbols};
