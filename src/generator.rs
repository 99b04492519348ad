// ABOUTME: Background generation worker: renders a request on a tokio task after a delay.
// ABOUTME: Results flow back to the UI loop over an mpsc channel; the session is never touched here.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::studio::GenerationRequest;
use crate::styles::{ContentRenderer, Rendered};

/// Spawns renders with a fixed simulated latency.
#[derive(Debug, Clone)]
pub struct Generator {
    renderer: Arc<ContentRenderer>,
    latency: Duration,
    tx: mpsc::Sender<Rendered>,
}

impl Generator {
    /// Create a generator and the receiver its results arrive on.
    pub fn new(renderer: Arc<ContentRenderer>, latency: Duration) -> (Self, mpsc::Receiver<Rendered>) {
        let (tx, rx) = mpsc::channel(4);
        (
            Self {
                renderer,
                latency,
                tx,
            },
            rx,
        )
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Render `request` in the background.
    pub fn spawn(&self, request: GenerationRequest) -> JoinHandle<()> {
        let renderer = Arc::clone(&self.renderer);
        let latency = self.latency;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let rendered = request.render(&renderer);
            debug!(style = %rendered.style_id(), "render finished");
            // The UI may already have quit; a closed channel is fine.
            let _ = tx.send(rendered).await;
        })
    }
}
