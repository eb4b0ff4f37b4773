//! Calculator errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("not a number: {0:?}")]
    Parse(String),
    #[error("stack empty: can't get operand")]
    EmptyStack,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operation: {0:?}")]
    UnknownOperator(String),
    #[error("no operation selected")]
    MissingOperator,
}

pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// Text shown to the user when this error reaches the display.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::EmptyStack => "Can't calculate",
            CalcError::DivisionByZero => "Can't divide by zero",
            CalcError::UnknownOperator(_) => "Unknown operation",
            CalcError::Parse(_) | CalcError::MissingOperator => "Error!",
        }
    }

    /// Parse failures only mark the display; everything else pops a dialog.
    pub fn wants_dialog(&self) -> bool {
        !matches!(self, CalcError::Parse(_))
    }
}
