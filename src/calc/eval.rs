// src/calc/eval.rs

//! Arithmetic evaluation with range checking.

use crate::calc::Operator;
use crate::config::LimitsConfig;
use std::fmt;

/// The failures the evaluator can produce. Anything else the user does is a
/// silent no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    DivisionByZero,
    Overflow,
    Underflow,
}

impl MathError {
    /// The code shown on the display when this error occurs.
    pub fn display_code(self) -> &'static str {
        match self {
            MathError::DivisionByZero => "DIV.BY.0",
            MathError::Overflow => "OVERFLOW",
            MathError::Underflow => "UNDERFLOW",
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::Overflow => write!(f, "result above the configured maximum"),
            MathError::Underflow => write!(f, "result below the configured minimum"),
        }
    }
}

impl std::error::Error for MathError {}

/// Applies `op` to the operands and range-checks the result against the
/// calculator's full internal numeric range (which is independent of the
/// display width).
pub fn compute(lhs: f64, op: Operator, rhs: f64, limits: &LimitsConfig) -> Result<f64, MathError> {
    let result = match op {
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(MathError::DivisionByZero);
            }
            lhs / rhs
        }
        Operator::Multiply => lhs * rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Add => lhs + rhs,
    };
    if result < limits.min_value {
        return Err(MathError::Underflow);
    }
    if result > limits.max_value {
        return Err(MathError::Overflow);
    }
    Ok(result)
}
