//! Arithmetic operands as received from clients.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::errors::ErrorCode;

/// Non-negative integer or decimal, nothing else.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("numeric pattern is valid"));

/// One operand of an arithmetic request.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
    /// Absent, null, or any other JSON type.
    Invalid,
}

impl Operand {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n.as_f64().map(Operand::Number).unwrap_or(Operand::Invalid),
            Some(Value::String(s)) => Operand::Text(s.clone()),
            _ => Operand::Invalid,
        }
    }

    /// Textual form used for validation and the zero-divisor check.
    pub fn raw_text(&self) -> Option<String> {
        match self {
            Operand::Number(n) => Some(format_number(*n)),
            Operand::Text(s) => Some(s.clone()),
            Operand::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.raw_text().is_some_and(|text| NUMERIC.is_match(&text))
    }

    /// Whether the operand is textually `"0"`.
    pub fn is_literal_zero(&self) -> bool {
        self.raw_text().as_deref() == Some("0")
    }

    /// Validate and normalise into a single numeric type.
    pub fn normalize(&self) -> Result<f64, ErrorCode> {
        if !self.is_valid() {
            return Err(ErrorCode::BAD_OPERAND);
        }
        match self {
            Operand::Number(n) => Ok(*n),
            Operand::Text(s) => s.parse::<f64>().map_err(|_| ErrorCode::BAD_OPERAND),
            Operand::Invalid => Err(ErrorCode::BAD_OPERAND),
        }
    }
}

/// Shortest round-trip decimal form of `n`.
///
/// Integral values print without a fractional part; magnitudes of at least
/// 1e21 or below 1e-6 switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", n)
}
