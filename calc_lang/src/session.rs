use std::sync::Arc;

use crate::{
    evaluation::{calculate, error::EvalError},
    expression::{DigitOutOfRange, Expression},
    history::{CalculatorResult, HistoryError, HistoryRecorder},
    parsing::Operator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rendered result, which is also the new display text.
    Result(String),
    /// Nothing to calculate yet. The expression is left as it was.
    Incomplete,
}

/// Holds the expression currently being edited and records every finished
/// calculation.
pub struct Session {
    expression: Expression,
    history: Arc<dyn HistoryRecorder>,
}

impl Session {
    pub fn new(history: Arc<dyn HistoryRecorder>) -> Session {
        Session {
            expression: Expression::empty(),
            history,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn display(&self) -> String {
        self.expression.render()
    }

    pub fn add_operand(&mut self, digit: u8) -> Result<String, DigitOutOfRange> {
        self.expression = self.expression.append_operand(digit)?;
        Ok(self.display())
    }

    pub fn add_operator(&mut self, op: Operator) -> String {
        self.expression = self.expression.append_operator(op);
        self.display()
    }

    pub fn remove_last(&mut self) -> String {
        self.expression = self.expression.remove_last();
        self.display()
    }

    pub fn calculate(&mut self) -> Result<Outcome, EvalError> {
        let rendered = self.expression.render();
        let result = match calculate(&rendered)? {
            Some(result) => result,
            None => return Ok(Outcome::Incomplete),
        };

        let record = CalculatorResult::new(rendered, result.to_string());
        if let Err(e) = self.history.save(record) {
            log::warn!("Calculation was not recorded: {}", e);
        }

        self.expression = Expression::from(result);
        Ok(Outcome::Result(self.display()))
    }

    pub fn results(&self) -> Result<Vec<CalculatorResult>, HistoryError> {
        self.history.list_all()
    }
}
