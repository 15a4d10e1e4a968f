//! One-shot background catalog loader.
//!
//! The loader reads and parses the catalog on a worker thread and reports
//! the outcome over a channel, so the UI loop can keep painting skeleton
//! cards meanwhile. On success the worker waits `delay` before reporting,
//! which keeps the skeletons visible for at least that long. Failures are
//! reported immediately. There is no retry and no cancellation: if the
//! receiver is dropped the result is discarded.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use langcat_types::Catalog;

use crate::{Error, Result};

/// Outcome of a background load
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(Catalog),
    Failed(Error),
}

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
    delay: Duration,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Minimum time between starting a successful load and reporting it
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the catalog on the calling thread, without the artificial delay
    pub fn load_blocking(&self) -> Result<Catalog> {
        let catalog = Catalog::from_path(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            items = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Start the load on a worker thread
    pub fn spawn(self) -> Result<LoadHandle> {
        let (tx, rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("catalog-loader".to_string())
            .spawn(move || {
                let event = match self.load_blocking() {
                    Ok(catalog) => {
                        if !self.delay.is_zero() {
                            thread::sleep(self.delay);
                        }
                        LoadEvent::Loaded(catalog)
                    }
                    Err(err) => {
                        tracing::error!(path = %self.path.display(), error = %err, "failed to load catalog");
                        LoadEvent::Failed(err)
                    }
                };

                // Receiver gone means the UI quit mid-load
                let _ = tx.send(event);
            })
            .map_err(|e| Error::Load(format!("failed to spawn loader thread: {}", e)))?;

        Ok(LoadHandle {
            rx,
            worker: Some(worker),
        })
    }
}

/// Receiving end of a background load
pub struct LoadHandle {
    rx: Receiver<LoadEvent>,
    worker: Option<JoinHandle<()>>,
}

impl LoadHandle {
    /// Non-blocking check for the load outcome
    ///
    /// Yields the outcome exactly once. A worker that died without
    /// reporting surfaces as `LoadEvent::Failed`.
    pub fn try_recv(&mut self) -> Option<LoadEvent> {
        if self.worker.is_none() {
            return None;
        }

        match self.rx.try_recv() {
            Ok(event) => {
                self.finish();
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finish();
                Some(LoadEvent::Failed(Error::Load(
                    "loader thread exited without a result".to_string(),
                )))
            }
        }
    }

    /// Block until the load outcome arrives
    pub fn wait(mut self) -> LoadEvent {
        let event = match self.rx.recv() {
            Ok(event) => event,
            Err(_) => LoadEvent::Failed(Error::Load(
                "loader thread exited without a result".to_string(),
            )),
        };
        self.finish();
        event
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_none()
    }

    fn finish(&mut self) {
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::warn!("catalog loader thread panicked");
        }
    }
}
