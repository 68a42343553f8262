//! The accumulator engine behind the keypad.
//!
//! Every button press is either a new operand or a symbol. Binary operators
//! are deferred: the left operand is captured when the operator is pressed
//! and the function is applied once the next operator (or `=`) arrives.
//! Chains evaluate strictly left to right.

use super::operation::{self, BinaryFunction, Operation};
use tracing::{debug, trace};

/// A binary operator waiting for its right operand.
#[derive(Clone, Copy, Debug)]
struct PendingBinaryOperation {
    function: BinaryFunction,
    first_operand: f64,
}

/// Running accumulator plus at most one pending binary operation.
#[derive(Debug, Default)]
pub struct CalculatorBrain {
    accumulator: f64,
    pending: Option<PendingBinaryOperation>,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of the accumulator.
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// Whether a binary operator is waiting for its right operand.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Overwrite the accumulator.
    pub fn set_operand(&mut self, operand: f64) {
        trace!(operand, "set operand");
        self.accumulator = operand;
    }

    /// Apply the operation bound to `symbol`. Unknown symbols are ignored.
    ///
    /// No domain checks are made: `√` of a negative number or division by
    /// zero leave NaN or infinity in the accumulator.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(op) = operation::lookup(symbol) else {
            trace!(symbol, "ignoring unknown symbol");
            return;
        };

        match op {
            Operation::Constant(value) => self.accumulator = value,
            Operation::Unary(function) => self.accumulator = function(self.accumulator),
            Operation::Binary(function) => {
                self.execute_pending_binary_operation();
                self.pending = Some(PendingBinaryOperation {
                    function,
                    first_operand: self.accumulator,
                });
            }
            Operation::Equals => self.execute_pending_binary_operation(),
            // The pending operation survives a clear.
            Operation::Clear => self.accumulator = 0.0,
        }

        debug!(
            symbol,
            accumulator = self.accumulator,
            pending = self.pending.is_some(),
            "performed operation"
        );
    }

    fn execute_pending_binary_operation(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = (pending.function)(pending.first_operand, self.accumulator);
        }
    }
}
