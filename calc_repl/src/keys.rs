use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, one_of},
    combinator::{all_consuming, map, map_opt, value},
    error::context,
    multi::many0,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use calc_lang::parsing::Operator;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Digit(u8),
    Operator(Operator),
    RemoveLast,
    Calculate,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Keys(Vec<Key>),
    History,
    Help,
    Quit,
}

fn parse_digit(input: &str) -> IResult<&str, Key> {
    context(
        "digit",
        map_opt(one_of("0123456789"), |c: char| {
            c.to_digit(10).map(|d| Key::Digit(d as u8))
        }),
    )(input)
}

fn parse_operator(input: &str) -> IResult<&str, Key> {
    context(
        "operator",
        map(
            alt((
                value(Operator::Add, char('+')),
                value(Operator::Subtract, char('-')),
                value(Operator::Multiply, one_of("×*xX")),
                value(Operator::Divide, one_of("÷/")),
            )),
            Key::Operator,
        ),
    )(input)
}

fn parse_key(input: &str) -> IResult<&str, Key> {
    alt((
        parse_digit,
        parse_operator,
        value(Key::RemoveLast, char('<')),
        value(Key::Calculate, char('=')),
    ))(input)
}

fn parse_keys(input: &str) -> IResult<&str, Vec<Key>> {
    context(
        "keys",
        preceded(multispace0, many0(terminated(parse_key, multispace0))),
    )(input)
}

fn parse_meta(input: &str) -> IResult<&str, Command> {
    context(
        "command",
        delimited(
            preceded(multispace0, char(':')),
            alt((
                value(Command::History, tag("history")),
                value(Command::Help, tag("help")),
                value(Command::Quit, alt((tag("quit"), tag("q")))),
            )),
            multispace0,
        ),
    )(input)
}

/// Reads one line of input. A line is either a `:command` or a run of key
/// presses; whitespace between keys is ignored.
pub fn parse_command(input: &str) -> Result<Command, String> {
    all_consuming(alt((parse_meta, map(parse_keys, Command::Keys))))(input)
        .map(|(_, command)| command)
        .map_err(|e| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                format!("Unexpected input `{}`", e.input.trim())
            }
            nom::Err::Incomplete(_) => "Incomplete input".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use calc_lang::parsing::Operator;

    use super::{parse_command, Command, Key};

    #[test]
    fn test_keys() {
        assert_eq!(
            parse_command("32+1="),
            Ok(Command::Keys(vec![
                Key::Digit(3),
                Key::Digit(2),
                Key::Operator(Operator::Add),
                Key::Digit(1),
                Key::Calculate,
            ]))
        );
    }

    #[test]
    fn test_keys_with_spaces() {
        assert_eq!(
            parse_command("  3 × 4 < ÷ 2 "),
            Ok(Command::Keys(vec![
                Key::Digit(3),
                Key::Operator(Operator::Multiply),
                Key::Digit(4),
                Key::RemoveLast,
                Key::Operator(Operator::Divide),
                Key::Digit(2),
            ]))
        );
    }

    #[test]
    fn test_ascii_operator_aliases() {
        assert_eq!(
            parse_command("*x/-"),
            Ok(Command::Keys(vec![
                Key::Operator(Operator::Multiply),
                Key::Operator(Operator::Multiply),
                Key::Operator(Operator::Divide),
                Key::Operator(Operator::Subtract),
            ]))
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_command(""), Ok(Command::Keys(vec![])));
    }

    #[test]
    fn test_meta_commands() {
        assert_eq!(parse_command(":history"), Ok(Command::History));
        assert_eq!(parse_command(":help"), Ok(Command::Help));
        assert_eq!(parse_command(":quit"), Ok(Command::Quit));
        assert_eq!(parse_command(" :q "), Ok(Command::Quit));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_command("3 + a"),
            Err("Unexpected input `a`".to_string())
        );
        assert!(parse_command(":nope").is_err());
    }
}
