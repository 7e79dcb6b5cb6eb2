//! Application error domain.
//!
//! # Responsibilities
//! - Enumerate the failure classes the gateway reports to callers
//! - Map each class to a fixed human-readable message
//! - Render a class into the JSON error body shared by every endpoint
//!
//! # Design Decisions
//! - Codes are a newtype over `u16` so unknown codes stay representable
//! - Assigned values are stable and never reused
//! - Rendering never fails; a code without a message omits the `error` key

use serde::Serialize;
use std::fmt;

/// Numeric identifier of a failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// Target URL is malformed or uses an unsupported scheme.
    pub const BAD_URI: ErrorCode = ErrorCode(101);
    /// Transport failure while talking to the upstream.
    pub const REQUEST_ERROR: ErrorCode = ErrorCode(102);
    /// Arithmetic operand is not a valid numeric representation.
    pub const BAD_OPERAND: ErrorCode = ErrorCode(103);
    /// Division with a zero divisor.
    pub const ZERO_DIVISION: ErrorCode = ErrorCode(104);

    /// Fixed message for this code, if one is registered.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::REQUEST_ERROR => Some("Upstream responded with error"),
            Self::BAD_OPERAND => {
                Some("Operands must be either a valid number or string representing a valid number")
            }
            Self::ZERO_DIVISION => Some("Division by 0 detected"),
            _ => None,
        }
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JSON error body: `{"code": <int>, "error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Render an error code into the body sent to clients.
pub fn make_error(code: ErrorCode) -> ErrorBody {
    ErrorBody {
        code,
        error: code.message(),
    }
}
