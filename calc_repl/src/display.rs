use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

use calc_lang::{history::CalculatorResult, parsing::{tokenize, Token}};

lazy_static! {
    static ref QUOTED_TEXT: Regex = Regex::new(r#"`(?:[^`\\]|\\.)*`"#).unwrap();
}

fn transform_quoted_text<F: Fn(&str) -> String>(transform: F) -> impl Fn(&str) -> String {
    move |s| {
        let mut result = String::new();
        let mut last_match_end = 0;

        for quoted in QUOTED_TEXT.find_iter(s) {
            let text = quoted.as_str();

            result.push_str(&s[last_match_end..quoted.start()]);
            result.push_str(&transform(&text[1..text.len() - 1]));
            last_match_end = quoted.end();
        }

        result.push_str(&s[last_match_end..]);
        result
    }
}

fn colorize_quoted_expressions(s: &str) -> String {
    let transform = |s: &str| -> String {
        tokenize(s)
            .ok()
            .map(|tokens| ColoredTokens::new(&tokens).to_string())
            .unwrap_or_else(|| s.yellow().to_string())
    };

    transform_quoted_text(transform)(s)
}

pub struct ColoredTokens<'a> {
    tokens: &'a [Token],
}

impl<'a> ColoredTokens<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }
}

impl std::fmt::Display for ColoredTokens<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colored = self
            .tokens
            .iter()
            .map(|token| match token {
                Token::Operand(n) => n.to_string().bright_green().to_string(),
                Token::Op(op) => op.symbol().bright_blue().bold().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        write!(f, "{}", colored)
    }
}

/// Display text as shown on the calculator screen. Empty text is shown as
/// a dimmed placeholder so the line is never blank.
pub struct ColoredDisplay {
    text: String,
}

impl ColoredDisplay {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl std::fmt::Display for ColoredDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            return write!(f, "{}", "(empty)".dimmed());
        }

        match tokenize(&self.text) {
            Ok(tokens) => write!(f, "{}", ColoredTokens::new(&tokens)),
            Err(_) => write!(f, "{}", self.text),
        }
    }
}

pub struct ColoredRecord<'a> {
    index: usize,
    record: &'a CalculatorResult,
}

impl<'a> ColoredRecord<'a> {
    pub fn new(index: usize, record: &'a CalculatorResult) -> Self {
        Self { index, record }
    }
}

impl std::fmt::Display for ColoredRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            format!("{:>3}.", self.index).dimmed(),
            ColoredDisplay::new(self.record.expression.clone()),
            "=".dimmed(),
            ColoredDisplay::new(self.record.result.clone()),
        )
    }
}

#[derive(Debug)]
pub struct ColoredError<T: std::error::Error> {
    error: T,
}

impl<T: std::error::Error> ColoredError<T> {
    pub fn new(error: T) -> Self {
        Self { error }
    }
}

impl<T: std::error::Error> std::fmt::Display for ColoredError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", colorize_quoted_expressions(&self.error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::transform_quoted_text;

    #[test]
    fn test_transform_quoted_text() {
        let upper = transform_quoted_text(|s| s.to_uppercase());
        assert_eq!(upper("a `b` c `de`"), "a B c DE");
        assert_eq!(upper("nothing quoted"), "nothing quoted");
    }
}
