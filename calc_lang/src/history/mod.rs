use serde::{Deserialize, Serialize};

pub use background::BackgroundHistory;
pub use error::HistoryError;
pub use file::FileHistory;
pub use memory::MemoryHistory;

mod background;
pub mod error;
mod file;
mod memory;

/// A finished calculation: the expression as it was displayed and the
/// displayed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub expression: String,
    pub result: String,
}

impl CalculatorResult {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

pub trait HistoryRecorder: Send + Sync {
    fn save(&self, record: CalculatorResult) -> Result<(), HistoryError>;

    /// Every saved record, oldest first.
    fn list_all(&self) -> Result<Vec<CalculatorResult>, HistoryError>;
}
