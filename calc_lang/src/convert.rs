use crate::{
    expression::Expression,
    parsing::{Operator, Token},
};

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Self::Operand(n)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Op(op)
    }
}

impl TryFrom<Token> for i64 {
    type Error = Token;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Operand(n) => Ok(n),
            _ => Err(token),
        }
    }
}

impl TryFrom<Token> for Operator {
    type Error = Token;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        match token {
            Token::Op(op) => Ok(op),
            _ => Err(token),
        }
    }
}

impl From<i64> for Expression {
    fn from(seed: i64) -> Self {
        Self::from_tokens(im::Vector::unit(Token::Operand(seed)))
    }
}
