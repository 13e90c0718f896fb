use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("no numbers or operators found")]
    no_tokens,

    #[error("division by zero")]
    division_by_zero,

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("'{0}' is not a valid operator")]
    invalid_operator(String),

    #[error("expected a number after '{0}'")]
    missing_operand(String),

    #[error("expected a number after '{0}', found '{1}'")]
    misplaced_operator(String, String),
}

impl CalcError {
    /// The text shown in the result banner for this failure.
    pub fn user_message(&self) -> String {
        use CalcError::*;
        match self {
            no_tokens => "Invalid input.".into(),
            division_by_zero => "Error: Division by zero.".into(),
            invalid_number(_) | invalid_operator(_) => format!("Error: {}", self),
            missing_operand(_) | misplaced_operator(..) => format!("Error: Invalid input ({}).", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
