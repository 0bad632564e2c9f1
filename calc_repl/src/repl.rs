use std::fmt;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use calc_lang::{
    history::CalculatorResult,
    session::{Outcome, Session},
};

use crate::display::ColoredError;
use crate::keys::{parse_command, Command, Key};

#[derive(Debug, PartialEq, Eq)]
pub enum REPLError {
    /// The user closed the prompt with CTRL-C or CTRL-D.
    Exit,
    Readline(String),
    Input(String),
    Calculation(String),
    History(String),
}

impl std::error::Error for REPLError {}

impl fmt::Display for REPLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            REPLError::Exit => write!(f, "{}", "Bye".dimmed()),
            REPLError::Readline(s) => write!(f, "{} {}", "Prompt closed:".red(), s),
            REPLError::Input(s) => write!(f, "{} {}", "Invalid input:".red(), s),
            REPLError::Calculation(s) => write!(f, "{} {}", "Cannot calculate:".red(), s),
            REPLError::History(s) => write!(f, "{} {}", "History unavailable:".red(), s),
        }
    }
}

/// What the screen should show after a line of input, in order.
#[derive(Debug, PartialEq, Eq)]
pub enum Feedback {
    Display(String),
    Result(String),
    IncompleteExpression,
    /// A key that could not be applied. Keys after it on the same line are dropped.
    Error(REPLError),
    History(Vec<CalculatorResult>),
    Help,
    Quit,
}

pub fn read(rl: &mut Editor<()>, prompt: &str) -> Result<String, REPLError> {
    let prompt = format!("{} ", prompt.bright_blue().bold());

    rl.readline(&prompt).map_err(|e| match e {
        ReadlineError::Interrupted | ReadlineError::Eof => REPLError::Exit,
        err => REPLError::Readline(err.to_string()),
    })
}

fn press(session: &mut Session, key: Key) -> Result<Option<Feedback>, REPLError> {
    match key {
        Key::Digit(digit) => {
            session
                .add_operand(digit)
                .map_err(|e| REPLError::Input(ColoredError::new(e).to_string()))?;
        }
        Key::Operator(op) => {
            session.add_operator(op);
        }
        Key::RemoveLast => {
            session.remove_last();
        }
        Key::Calculate => {
            let outcome = session
                .calculate()
                .map_err(ColoredError::new)
                .map_err(|e| REPLError::Calculation(e.to_string()))?;

            return Ok(Some(match outcome {
                Outcome::Result(result) => Feedback::Result(result),
                Outcome::Incomplete => Feedback::IncompleteExpression,
            }));
        }
    }

    Ok(None)
}

/// Applies a line of input to the session. A line that does not parse is
/// rejected as a whole. Otherwise keys apply in order until one fails, and
/// everything shown up to that key is kept ahead of the error.
pub fn evaluate(session: &mut Session, input: &str) -> Result<Vec<Feedback>, REPLError> {
    let keys = match parse_command(input).map_err(REPLError::Input)? {
        Command::Keys(keys) => keys,
        Command::History => {
            let records = session
                .results()
                .map_err(|e| REPLError::History(e.to_string()))?;
            return Ok(vec![Feedback::History(records)]);
        }
        Command::Help => return Ok(vec![Feedback::Help]),
        Command::Quit => return Ok(vec![Feedback::Quit]),
    };

    let mut feedback = Vec::new();
    for key in keys {
        match press(session, key) {
            Ok(Some(f)) => feedback.push(f),
            Ok(None) => {}
            Err(e) => {
                feedback.push(Feedback::Error(e));
                return Ok(feedback);
            }
        }
    }

    match feedback.last() {
        Some(Feedback::Result(_)) => {}
        _ => feedback.push(Feedback::Display(session.display())),
    }

    Ok(feedback)
}
