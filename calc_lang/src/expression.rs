use crate::parsing::{Operator, Token};

/// Returned when a key other than `0`..=`9` is appended as an operand.
#[derive(Debug, PartialEq, Eq)]
pub struct DigitOutOfRange {
    pub digit: u8,
}

impl std::error::Error for DigitOutOfRange {}

/// An immutable sequence of tokens shaped `Operand (Op Operand)*`, optionally
/// followed by one dangling operator. Every edit returns a new value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expression {
    tokens: im::Vector<Token>,
}

fn grow(operand: i64, digit: i64) -> Option<i64> {
    let shifted = operand.checked_mul(10)?;
    if operand < 0 {
        shifted.checked_sub(digit)
    } else {
        shifted.checked_add(digit)
    }
}

impl Expression {
    pub fn empty() -> Expression {
        Expression::default()
    }

    pub(crate) fn from_tokens(tokens: im::Vector<Token>) -> Expression {
        Expression { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.tokens.last().map_or(false, Token::is_operand)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter()
    }

    pub fn append_operand(&self, digit: u8) -> Result<Expression, DigitOutOfRange> {
        if digit > 9 {
            return Err(DigitOutOfRange { digit });
        }

        let mut tokens = self.tokens.clone();
        match tokens.last().copied() {
            Some(Token::Operand(operand)) => match grow(operand, i64::from(digit)) {
                Some(grown) => {
                    tokens.pop_back();
                    tokens.push_back(grown.into());
                }
                None => {
                    log::warn!("Ignoring digit {digit}, operand {operand} would overflow");
                    return Ok(self.clone());
                }
            },
            _ => tokens.push_back(i64::from(digit).into()),
        }

        Ok(Expression { tokens })
    }

    pub fn append_operator(&self, op: Operator) -> Expression {
        let mut tokens = self.tokens.clone();
        match tokens.last().copied() {
            None => return self.clone(),
            Some(Token::Op(_)) => {
                tokens.pop_back();
            }
            Some(Token::Operand(_)) => {}
        }

        tokens.push_back(op.into());
        Expression { tokens }
    }

    pub fn remove_last(&self) -> Expression {
        let mut tokens = self.tokens.clone();
        match tokens.pop_back() {
            Some(Token::Operand(operand)) if !(-9..=9).contains(&operand) => {
                tokens.push_back(Token::Operand(operand / 10));
            }
            _ => {}
        }

        Expression { tokens }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}
