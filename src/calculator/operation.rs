//! The fixed table of operations, keyed by button symbol.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::f64::consts;

pub type UnaryFunction = fn(f64) -> f64;
pub type BinaryFunction = fn(f64, f64) -> f64;

/// What a button does to the accumulator.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Replace the accumulator with a fixed value.
    Constant(f64),
    /// Apply a function to the accumulator in place.
    Unary(UnaryFunction),
    /// Defer a function until its right operand is known.
    Binary(BinaryFunction),
    /// Resolve the pending binary operation, if any.
    Equals,
    /// Reset the accumulator to zero.
    Clear,
}

lazy_static! {
    static ref OPERATIONS: HashMap<&'static str, Operation> = {
        let mut table = HashMap::new();
        table.insert("π", Operation::Constant(consts::PI));
        table.insert("e", Operation::Constant(consts::E));
        table.insert("√", Operation::Unary(f64::sqrt));
        table.insert("cos", Operation::Unary(f64::cos));
        table.insert("x", Operation::Binary(|a, b| a * b));
        table.insert("÷", Operation::Binary(|a, b| a / b));
        table.insert("+", Operation::Binary(|a, b| a + b));
        table.insert("-", Operation::Binary(|a, b| a - b));
        table.insert("=", Operation::Equals);
        table.insert("C", Operation::Clear);
        table
    };
}

/// Look up the operation bound to `symbol`.
pub fn lookup(symbol: &str) -> Option<Operation> {
    OPERATIONS.get(symbol).copied()
}

/// All known symbols, sorted.
pub fn symbols() -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = OPERATIONS.keys().copied().collect();
    symbols.sort_unstable();
    symbols
}
