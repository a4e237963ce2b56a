//! Dashboard controller — tokio effect handler around [`Dashboard`].
//!
//! - One background task per submit, with a single await on the source
//! - Cancel-and-replace: a new submit aborts the previous task
//! - Stale results are dropped by the dashboard's generation check
//! - Stream-based event delivery so the front-end knows when to repaint

use std::pin::Pin;
use std::sync::Arc;

use futures_util::stream::Stream;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::client::PredictionSource;
use crate::domain::dashboard::{Dashboard, FetchTicket, RequestId, Screen};

/// Something the front-end should react to (usually by repainting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Input or phase changed on the calling side (edit / submit).
    Changed,
    /// A fetch finished and its result was applied.
    Resolved { request: RequestId },
    /// A fetch finished after being superseded; nothing changed.
    Stale { request: RequestId },
}

/// Owns the dashboard state and runs its fetches.
pub struct DashboardController<S: PredictionSource> {
    source: Arc<S>,
    state: Arc<Mutex<Dashboard>>,
    task: Mutex<Option<JoinHandle<()>>>,
    event_tx: mpsc::Sender<DashboardEvent>,
    event_rx: Mutex<mpsc::Receiver<DashboardEvent>>,
}

impl<S: PredictionSource> DashboardController<S> {
    pub fn new(source: S) -> Self {
        let (event_tx, event_rx) = mpsc::channel(64);
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(Dashboard::new())),
            task: Mutex::new(None),
            event_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    /// Queue a `Changed` event. Dropped when the queue is full: a full queue
    /// already holds events that will trigger a repaint.
    fn emit_changed(&self) {
        let _ = self.event_tx.try_send(DashboardEvent::Changed);
    }

    /// Replace the pending symbol input.
    pub async fn edit(&self, text: impl Into<String>) {
        self.state.lock().await.edit(text);
        self.emit_changed();
    }

    /// Submit the pending input. Returns the new request, or `None` for empty input.
    pub async fn submit(&self) -> Option<RequestId> {
        let mut state = self.state.lock().await;
        let FetchTicket { request, symbol } = state.submit()?;

        let mut task = self.task.lock().await;
        if let Some(previous) = task.take() {
            previous.abort();
        }

        tracing::info!(%request, symbol = %symbol, "Fetching prediction");

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();

        *task = Some(tokio::spawn(async move {
            let outcome = source.fetch_prediction(&symbol).await;
            if let Err(e) = &outcome {
                tracing::warn!(%request, error = %e, "Prediction fetch failed");
            }

            let applied = shared.lock().await.resolve(request, outcome);
            let event = if applied {
                DashboardEvent::Resolved { request }
            } else {
                DashboardEvent::Stale { request }
            };
            // Waits for room; the receiver only goes away with the controller.
            let _ = event_tx.send(event).await;
        }));
        drop(task);
        drop(state);

        self.emit_changed();
        Some(request)
    }

    /// Edit then submit, the way a form with a button is used.
    pub async fn submit_symbol(&self, text: impl Into<String>) -> Option<RequestId> {
        self.edit(text).await;
        self.submit().await
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> Dashboard {
        self.state.lock().await.clone()
    }

    pub async fn screen(&self) -> Screen {
        self.state.lock().await.screen()
    }

    /// Stream of controller events.
    ///
    /// The returned stream borrows `self`; only one consumer receives each event.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = DashboardEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }
}

impl<S: PredictionSource> Drop for DashboardController<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}
