//! Soft diagnostics reported while evaluating.

use std::fmt;

/// Cause tag of an analysis warning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WarningCause {
    /// Division or modulo by a value that is, or may be, zero.
    DivisionByZero,
    /// An object used where an integer or number is required.
    ObjectConvertedToInteger,
    /// Operator applied to operand types it does not support.
    UnsupportedOperandTypes,
    /// Floats compared with `===` or `!==`.
    FloatingPointIdentity,
    /// Array key that is not a scalar, or a key slot that is unavailable.
    IllegalOffsetType,
    /// `clone` applied to something that may not be an object.
    CloneNonObject,
}

impl WarningCause {
    /// Stable upper-case code of the cause.
    pub const fn code(self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::ObjectConvertedToInteger => "OBJECT_CONVERTED_TO_INTEGER",
            Self::UnsupportedOperandTypes => "UNSUPPORTED_OPERAND_TYPES",
            Self::FloatingPointIdentity => "FLOATING_POINT_IDENTITY",
            Self::IllegalOffsetType => "ILLEGAL_OFFSET_TYPE",
            Self::CloneNonObject => "CLONE_NON_OBJECT",
        }
    }
}

impl fmt::Display for WarningCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A reported warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisWarning {
    pub message: String,
    pub cause: WarningCause,
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.cause, self.message)
    }
}

/// Receiver of soft diagnostics.
///
/// Reporting never fails and never interrupts evaluation.
pub trait WarningSink {
    fn set_warning(&mut self, message: &str, cause: WarningCause);
}

impl WarningSink for Vec<AnalysisWarning> {
    fn set_warning(&mut self, message: &str, cause: WarningCause) {
        self.push(AnalysisWarning {
            message: message.to_owned(),
            cause,
        });
    }
}
