//! Background refresh worker.
//!
//! The UI thread never blocks on the network. [`Refresher::spawn`] runs one
//! fetch on the tokio runtime and sends the outcome back over an unbounded
//! channel; the event loop drains it between frames with
//! [`Refresher::try_next`].

use std::future::Future;
use std::sync::Arc;
use todoview_core::{error::RefreshResult, RefreshError, Todo};
use todoview_fetch::Fetcher;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub type RefreshOutcome = RefreshResult<Vec<Todo>>;

pub struct Refresher {
    runtime: Handle,
    fetcher: Arc<Fetcher>,
    tx: mpsc::UnboundedSender<RefreshOutcome>,
    rx: mpsc::UnboundedReceiver<RefreshOutcome>,
}

impl Refresher {
    pub fn new(runtime: Handle, fetcher: Fetcher) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            fetcher: Arc::new(fetcher),
            tx,
            rx,
        }
    }

    pub fn url(&self) -> &str {
        self.fetcher.url()
    }

    /// Start one fetch. Exactly one outcome is delivered per call, including
    /// when the fetch task panics.
    pub fn spawn(&self) {
        let fetcher = Arc::clone(&self.fetcher);
        self.spawn_with(async move { fetcher.fetch_todos().await });
    }

    pub(crate) fn spawn_with<F>(&self, work: F)
    where
        F: Future<Output = RefreshOutcome> + Send + 'static,
    {
        let tx = self.tx.clone();

        let job = self.runtime.spawn(work);
        self.runtime.spawn(async move {
            let outcome = match job.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "refresh task failed");
                    Err(RefreshError::unexpected(e.to_string()))
                }
            };
            // The receiver only disappears when the app is shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// Non-blocking poll for a finished refresh.
    pub fn try_next(&mut self) -> Option<RefreshOutcome> {
        self.rx.try_recv().ok()
    }
}
