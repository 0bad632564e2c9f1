use crate::parsing::{error::UnknownLexeme, Operator};

#[derive(Debug, PartialEq, Eq)]
pub enum EvalError {
    DivisionByZero {
        dividend: i64,
    },
    Overflow {
        operator: Operator,
        left: i64,
        right: i64,
    },
    MalformedToken(String),
}

impl std::error::Error for EvalError {}

impl EvalError {
    /// Reports the left-hand value as it appears in the expression when it was
    /// negated for evaluation.
    pub(crate) fn negate_left(self) -> EvalError {
        match self {
            EvalError::DivisionByZero { dividend } => EvalError::DivisionByZero {
                dividend: dividend.wrapping_neg(),
            },
            EvalError::Overflow {
                operator,
                left,
                right,
            } => EvalError::Overflow {
                operator,
                left: left.wrapping_neg(),
                right,
            },
            e => e,
        }
    }
}

impl From<UnknownLexeme> for EvalError {
    fn from(e: UnknownLexeme) -> Self {
        EvalError::MalformedToken(e.lexeme)
    }
}
