//! The pure evaluation core: one operator token, two operands, one result.

use thiserror::Error;

/// Failures surfaced by [`evaluate`].
///
/// The display text of each variant is part of the program's contract: the
/// driver prints it verbatim after an `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The operator token is not one of `+`, `-`, `*`, `/`.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// Division was requested with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

/// Applies the binary operation selected by `op` to `a` and `b`.
///
/// Operator matching is exact, byte for byte: no trimming, no case folding,
/// no aliases. Arithmetic is the host's `f64` arithmetic; overflow to
/// infinity and NaN propagation are passed through untouched, except that a
/// zero divisor is rejected before the divide ever happens (so `0/0` is an
/// error, not NaN).
///
/// The function is pure and stateless.
pub fn evaluate(a: f64, b: f64, op: &str) -> Result<f64, EvalError> {
    match op {
        "+" => Ok(a + b),
        "-" => Ok(a - b),
        "*" => Ok(a * b),
        "/" => {
            // IEEE equality makes -0.0 == 0.0, so both zero signs are rejected.
            if b == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        _ => Err(EvalError::UnsupportedOperation(op.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_operators() {
        assert_eq!(evaluate(3.0, 4.0, "+"), Ok(7.0));
        assert_eq!(evaluate(10.0, 4.0, "-"), Ok(6.0));
        assert_eq!(evaluate(2.5, 4.0, "*"), Ok(10.0));
        assert_eq!(evaluate(7.0, 2.0, "/"), Ok(3.5));
    }

    #[test]
    fn test_matches_host_arithmetic_bit_for_bit() {
        let a = 0.1;
        let b = 0.2;
        assert_eq!(evaluate(a, b, "+").unwrap().to_bits(), (a + b).to_bits());
        assert_eq!(evaluate(a, b, "-").unwrap().to_bits(), (a - b).to_bits());
        assert_eq!(evaluate(a, b, "*").unwrap().to_bits(), (a * b).to_bits());
        assert_eq!(evaluate(a, b, "/").unwrap().to_bits(), (a / b).to_bits());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(1.0, 0.0, "/"), Err(EvalError::DivisionByZero));
        assert_eq!(
            EvalError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
    }

    #[test]
    fn test_division_by_negative_zero() {
        assert_eq!(evaluate(1.0, -0.0, "/"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_zero_over_zero_is_error_not_nan() {
        assert_eq!(evaluate(0.0, 0.0, "/"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_zero_divisor_only_matters_for_division() {
        assert_eq!(evaluate(5.0, 0.0, "*"), Ok(0.0));
        assert_eq!(evaluate(5.0, 0.0, "+"), Ok(5.0));
    }

    #[test]
    fn test_unsupported_operator_keeps_token_verbatim() {
        for op in ["%", "", " ", " +", "+ ", "ADD", "add", "÷", "x"] {
            match evaluate(1.0, 2.0, op) {
                Err(EvalError::UnsupportedOperation(tok)) => assert_eq!(tok, op),
                other => panic!("expected UnsupportedOperation for {:?}, got {:?}", op, other),
            }
        }
        assert_eq!(
            EvalError::UnsupportedOperation("%".to_string()).to_string(),
            "Unsupported operation: %"
        );
    }

    #[test]
    fn test_overflow_passes_through() {
        assert_eq!(evaluate(f64::MAX, f64::MAX, "+"), Ok(f64::INFINITY));
        assert_eq!(evaluate(f64::MAX, f64::MAX, "*"), Ok(f64::INFINITY));
    }

    #[test]
    fn test_repeated_invocation_is_identical() {
        let first = evaluate(6.0, 3.0, "/");
        let second = evaluate(6.0, 3.0, "/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_addition_and_multiplication_commute() {
        let a = 1.25;
        let b = -9.5;
        assert_eq!(evaluate(a, b, "+"), evaluate(b, a, "+"));
        assert_eq!(evaluate(a, b, "*"), evaluate(b, a, "*"));
    }
}
