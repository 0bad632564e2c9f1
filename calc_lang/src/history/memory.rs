use std::sync::{Mutex, PoisonError};

use crate::history::{CalculatorResult, HistoryError, HistoryRecorder};

#[derive(Default)]
pub struct MemoryHistory {
    data: Mutex<Vec<CalculatorResult>>,
}

impl MemoryHistory {
    pub fn new() -> MemoryHistory {
        MemoryHistory::default()
    }
}

impl HistoryRecorder for MemoryHistory {
    fn save(&self, record: CalculatorResult) -> Result<(), HistoryError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.push(record);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<CalculatorResult>, HistoryError> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(data.clone())
    }
}
