#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
    Encoding(serde_json::Error),
    Corrupted { line: usize, reason: String },
    Disconnected,
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Encoding(e)
    }
}
