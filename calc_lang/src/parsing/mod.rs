use std::collections::HashMap;

use lazy_static::lazy_static;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::context,
    sequence::preceded,
    IResult,
};

use self::error::{ParseOperatorError, UnknownLexeme};

pub mod error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Binding strength of an operator. Variants are declared weakest first so
/// that the derived ordering matches arithmetic precedence.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    Operand(i64),
    Op(Operator),
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::Additive,
            Operator::Multiply | Operator::Divide => Precedence::Multiplicative,
        }
    }
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }
}

lazy_static! {
    static ref SYMBOLS_TABLE: HashMap<&'static str, Operator> = Operator::ALL
        .iter()
        .map(|op| (op.symbol(), *op))
        .collect();
}

impl std::str::FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        SYMBOLS_TABLE
            .get(symbol)
            .copied()
            .ok_or_else(|| ParseOperatorError {
                symbol: symbol.to_string(),
            })
    }
}

fn parse_operand(input: &str) -> IResult<&str, i64> {
    context(
        "operand",
        map_res(
            recognize(preceded(opt(char('-')), digit1)),
            str::parse::<i64>,
        ),
    )(input)
}

fn parse_operator(input: &str) -> IResult<&str, Operator> {
    context(
        "operator",
        map_res(
            alt((tag("+"), tag("-"), tag("×"), tag("÷"))),
            str::parse::<Operator>,
        ),
    )(input)
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    context(
        "token",
        alt((
            map(parse_operand, Token::Operand),
            map(parse_operator, Token::Op),
        )),
    )(input)
}

/// Splits rendered expression text on whitespace and reads every lexeme as
/// exactly one token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, UnknownLexeme> {
    input
        .split_whitespace()
        .map(|lexeme| {
            all_consuming(parse_token)(lexeme)
                .map(|(_, token)| token)
                .map_err(|_| UnknownLexeme {
                    lexeme: lexeme.to_string(),
                })
        })
        .collect()
}

#[macro_export]
macro_rules! parse_it {
    ($input:expr) => {
        $crate::parsing::tokenize($input).unwrap()
    };
}

#[cfg(test)]
mod tests {
    use crate::parsing::{Operator, Precedence, Token};

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            parse_it!("3 + 2"),
            vec![
                Token::Operand(3),
                Token::Op(Operator::Add),
                Token::Operand(2),
            ]
        );
    }

    #[test]
    fn test_all_symbols() {
        assert_eq!(
            parse_it!("1 + 2 - 3 × 4 ÷ 5"),
            vec![
                Token::Operand(1),
                Token::Op(Operator::Add),
                Token::Operand(2),
                Token::Op(Operator::Subtract),
                Token::Operand(3),
                Token::Op(Operator::Multiply),
                Token::Operand(4),
                Token::Op(Operator::Divide),
                Token::Operand(5),
            ]
        );
    }

    #[test]
    fn test_negative_operand() {
        assert_eq!(
            parse_it!("-4 - 2"),
            vec![
                Token::Operand(-4),
                Token::Op(Operator::Subtract),
                Token::Operand(2),
            ]
        );
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(
            parse_it!("3 +"),
            vec![Token::Operand(3), Token::Op(Operator::Add)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_it!("").is_empty());
        assert!(parse_it!("   ").is_empty());
    }

    #[test]
    fn test_unknown_lexeme() {
        let err = crate::parsing::tokenize("3 * 2").unwrap_err();
        assert_eq!(err.lexeme, "*");

        let err = crate::parsing::tokenize("3 +2").unwrap_err();
        assert_eq!(err.lexeme, "+2");

        let err = crate::parsing::tokenize("3a").unwrap_err();
        assert_eq!(err.lexeme, "3a");
    }

    #[test]
    fn test_operand_out_of_range() {
        assert!(crate::parsing::tokenize("99999999999999999999").is_err());
    }

    #[test]
    fn test_operator_from_symbol() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("-".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);

        assert!("*".parse::<Operator>().is_err());
        assert!("/".parse::<Operator>().is_err());
        assert!(" +".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_precedence() {
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert!(Operator::Divide.precedence() > Operator::Subtract.precedence());
        assert_eq!(
            Operator::Multiply.precedence(),
            Operator::Divide.precedence()
        );
        assert_eq!(Operator::Add.precedence(), Precedence::Additive);
        assert_eq!(Operator::Subtract.precedence(), Precedence::Additive);
    }
}
