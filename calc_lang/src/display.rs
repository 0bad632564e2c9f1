use crate::{
    evaluation::error::EvalError,
    expression::{DigitOutOfRange, Expression},
    history::error::HistoryError,
    parsing::{Operator, Token},
};

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Operand(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.tokens()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

impl std::fmt::Display for DigitOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operand keys are single digits, got `{}`", self.digit)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::DivisionByZero { dividend } => {
                write!(f, "Division by zero in `{} {} 0`", dividend, Operator::Divide)
            }
            EvalError::Overflow {
                operator,
                left,
                right,
            } => write!(
                f,
                "Integer overflow in `{} {} {}`",
                left, operator, right
            ),
            EvalError::MalformedToken(lexeme) => {
                write!(f, "Malformed token `{}`", lexeme)
            }
        }
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "History storage failed: {}", e),
            HistoryError::Encoding(e) => write!(f, "Could not encode history record: {}", e),
            HistoryError::Corrupted { line, reason } => {
                write!(f, "Corrupted history record at line {}: {}", line, reason)
            }
            HistoryError::Disconnected => write!(f, "History writer is no longer running"),
        }
    }
}
