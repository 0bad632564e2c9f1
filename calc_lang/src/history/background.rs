use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use crate::history::{CalculatorResult, HistoryError, HistoryRecorder};

enum Command {
    Save(CalculatorResult),
    Flush(flume::Sender<()>),
}

/// Moves saves of the wrapped recorder onto a worker thread, so that a slow
/// store never holds up key entry. Saves are applied in the order they were
/// queued; a failed save is logged and dropped.
pub struct BackgroundHistory {
    inner: Arc<dyn HistoryRecorder>,
    sender: Option<flume::Sender<Command>>,
    worker: Option<JoinHandle<()>>,
}

fn run(inner: Arc<dyn HistoryRecorder>, receiver: flume::Receiver<Command>) {
    for command in receiver.iter() {
        match command {
            Command::Save(record) => {
                if let Err(e) = inner.save(record) {
                    log::error!("{}", e);
                }
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    log::trace!("History writer stopped");
}

impl BackgroundHistory {
    pub fn new(inner: Arc<dyn HistoryRecorder>) -> Result<BackgroundHistory, HistoryError> {
        let (sender, receiver) = flume::unbounded();
        let worker_inner = inner.clone();

        let worker = thread::Builder::new()
            .name("history-writer".to_string())
            .spawn(move || run(worker_inner, receiver))?;

        Ok(BackgroundHistory {
            inner,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    fn send(&self, command: Command) -> Result<(), HistoryError> {
        self.sender
            .as_ref()
            .ok_or(HistoryError::Disconnected)?
            .send(command)
            .map_err(|_| HistoryError::Disconnected)
    }

    /// Blocks until every save queued so far has reached the wrapped recorder.
    pub fn flush(&self) -> Result<(), HistoryError> {
        let (done, wait) = flume::bounded(1);
        self.send(Command::Flush(done))?;
        wait.recv().map_err(|_| HistoryError::Disconnected)
    }
}

impl HistoryRecorder for BackgroundHistory {
    fn save(&self, record: CalculatorResult) -> Result<(), HistoryError> {
        self.send(Command::Save(record))
    }

    fn list_all(&self) -> Result<Vec<CalculatorResult>, HistoryError> {
        self.flush()?;
        self.inner.list_all()
    }
}

impl Drop for BackgroundHistory {
    fn drop(&mut self) {
        self.sender.take();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("History writer panicked, queued records may be lost");
            }
        }
    }
}
