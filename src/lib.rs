//! A tiny interactive console calculator.
//!
//! This crate implements a coursework-grade calculator: it prompts for two
//! real numbers and an operator symbol, evaluates the single binary operation
//! and prints a formatted result. It is intentionally small and easy to read,
//! suitable for exercising input handling, dispatch and error reporting.
//!
//! The pure core lives in [`evaluator`]; the surrounding I/O, from the
//! welcome banner to the `Error:` line on standard error, lives in [`driver`]
//! and operates on caller-supplied streams, so complete sessions can be
//! driven from tests.

pub mod driver;
pub mod evaluator;
mod scanner;

/// Just a convenient re-export of the evaluation core.
///
/// See [`evaluator::evaluate`] for the contract.
pub use evaluator::{EvalError, evaluate};
