//! A pocket calculator driven by button presses.
//!
//! The [`calculator`] engine keeps a single running accumulator and at most
//! one pending binary operation; operators chain strictly left to right.
//! The [`ui`] layer turns typed keys into engine calls and renders the
//! result.

pub mod calculator;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{CalcError, Result};
