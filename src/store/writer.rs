//! Background writer for the task list.
//!
//! Mutators hand the encoded list to a `SaveQueue` and return immediately.
//! A single Tokio task performs the writes, one at a time. Payloads that pile
//! up while a write is in flight are coalesced: only the newest is written,
//! since each payload is a full snapshot of the list.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::error::{Result, TaskListError};
use crate::prefs::Preferences;

enum Command {
    Save(String),
    Flush(oneshot::Sender<Result<()>>),
}

/// Serialized, latest-wins write queue for one preference key
#[derive(Debug, Clone)]
pub struct SaveQueue {
    tx: mpsc::UnboundedSender<Command>,
}

impl SaveQueue {
    /// Start the writer task. Must be called from within a Tokio runtime.
    pub fn spawn(prefs: Arc<dyn Preferences>, key: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let key = key.into();
        tokio::spawn(async move {
            run_writer(prefs, key, rx).await;
        });
        Self { tx }
    }

    /// Queue a snapshot for writing. Never blocks.
    pub fn submit(&self, payload: String) {
        if self.tx.send(Command::Save(payload)).is_err() {
            log::error!("Save queue stopped; dropping write");
        }
    }

    /// Wait until every snapshot submitted so far has been written.
    ///
    /// Returns the first write failure since the previous flush, if any.
    pub async fn flush(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(reply_tx))
            .map_err(|_| TaskListError::Storage("save queue stopped".to_string()))?;
        reply_rx
            .await
            .map_err(|_| TaskListError::Storage("save queue stopped".to_string()))?
    }
}

async fn run_writer(prefs: Arc<dyn Preferences>, key: String, mut rx: mpsc::UnboundedReceiver<Command>) {
    let mut pending_error: Option<TaskListError> = None;
    let mut next = rx.recv().await;

    while let Some(command) = next.take() {
        match command {
            Command::Save(mut payload) => {
                // Anything already queued behind this write supersedes it,
                // up to the next flush marker.
                let mut deferred = None;
                let mut skipped = 0usize;
                while let Ok(queued) = rx.try_recv() {
                    match queued {
                        Command::Save(newer) => {
                            payload = newer;
                            skipped += 1;
                        }
                        flush @ Command::Flush(_) => {
                            deferred = Some(flush);
                            break;
                        }
                    }
                }
                if skipped > 0 {
                    log::debug!("Coalesced {} superseded writes for '{}'", skipped, key);
                }

                match prefs.set_string(&key, &payload).await {
                    Ok(()) => log::debug!("Saved {} bytes under '{}'", payload.len(), key),
                    Err(e) => {
                        log::warn!("Failed to save '{}': {}", key, e);
                        pending_error.get_or_insert(e);
                    }
                }
                next = deferred;
            }
            Command::Flush(reply) => {
                let result = match pending_error.take() {
                    Some(e) => Err(e),
                    None => Ok(()),
                };
                let _ = reply.send(result);
            }
        }

        if next.is_none() {
            next = rx.recv().await;
        }
    }

    log::debug!("Save queue for '{}' shut down", key);
}
