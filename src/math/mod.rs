//! Arithmetic over client-supplied operands.
//!
//! # Data Flow
//! ```text
//! {a, b} (number | string | other)
//!     → operand.rs (Operand::from_json, validate, normalise to f64)
//!     → Operation::compute
//!     → "<a> <op> <b> = <result>" | ErrorCode
//! ```
//!
//! # Design Decisions
//! - Division checks the divisor's raw text against "0" before validating
//!   either operand, so ZERO_DIVISION wins over BAD_OPERAND
//! - Numbers render in shortest round-trip form

pub mod operand;

pub use operand::{format_number, Operand};

use crate::errors::ErrorCode;

/// The four supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Sub => a - b,
            Operation::Mul => a * b,
            Operation::Div => a / b,
        }
    }

    /// Validate both operands and produce the result message.
    pub fn compute(self, a: &Operand, b: &Operand) -> Result<String, ErrorCode> {
        if self == Operation::Div && b.is_literal_zero() {
            return Err(ErrorCode::ZERO_DIVISION);
        }

        let x = a.normalize()?;
        let y = b.normalize()?;
        let result = self.apply(x, y);

        Ok(format!(
            "{} {} {} = {}",
            format_number(x),
            self.symbol(),
            format_number(y),
            format_number(result)
        ))
    }
}
