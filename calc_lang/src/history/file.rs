use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::history::{CalculatorResult, HistoryError, HistoryRecorder};

/// Stores one JSON object per line, appended in the order records are saved.
pub struct FileHistory {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> FileHistory {
        FileHistory {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn decode_line(
    index: usize,
    line: io::Result<String>,
) -> Option<Result<CalculatorResult, HistoryError>> {
    let line = match line {
        Ok(line) => line,
        Err(e) => return Some(Err(e.into())),
    };

    if line.trim().is_empty() {
        return None;
    }

    Some(
        serde_json::from_str(&line).map_err(|e| HistoryError::Corrupted {
            line: index + 1,
            reason: e.to_string(),
        }),
    )
}

impl HistoryRecorder for FileHistory {
    fn save(&self, record: CalculatorResult) -> Result<(), HistoryError> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        log::debug!(
            "Saved `{}` = `{}` to {}",
            record.expression,
            record.result,
            self.path.display()
        );
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<CalculatorResult>, HistoryError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(index, line)| decode_line(index, line))
            .collect()
    }
}
