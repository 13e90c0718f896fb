use crate::error_handling::*;
use crate::parsing::*;

use std::fmt;
use tracing::debug;

/// Outcome of one Calculate: a rounded value or the message to show instead.
#[derive(Clone, Debug, PartialEq)]
pub enum EvaluationResult {
    value(f64),
    error(String),
}

impl EvaluationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::error(_))
    }
}

impl From<Result<f64>> for EvaluationResult {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(value) => Self::value(value),
            Err(e) => Self::error(e.user_message()),
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::value(value) if value.is_nan() => f.write_str("nan"),
            Self::value(value) if value.is_finite() && value.abs() >= 1e16 => {
                // Large magnitudes switch to exponent form with a signed exponent, as in "1e+16".
                let scientific = format!("{:e}", value);
                match scientific.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exponent)
                    },
                    _ => f.write_str(&scientific),
                }
            },
            // Whole numbers keep one decimal place, as in "20.0".
            Self::value(value) if value.fract() == 0.0 => write!(f, "{:.1}", value),
            Self::value(value) => write!(f, "{}", value),
            Self::error(message) => f.write_str(message),
        }
    }
}

/// Rounds to two decimals on the exact binary value, ties to even.
fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Applies the chain strictly left to right, with no operator precedence.
pub fn apply(expression: &str) -> Result<f64> {
    let (mut accumulator, chain) = parse(expression)?;
    for step in chain {
        let Step{operator, operand} = step?;
        accumulator = operator.call(accumulator, operand)?;
        debug!(?operator, operand, accumulator, "applied step");
    }
    Ok(round_cents(accumulator))
}

pub fn evaluate(expression: &str) -> EvaluationResult {
    let result = EvaluationResult::from(apply(expression));
    debug!(expression, %result, "evaluated");
    result
}
