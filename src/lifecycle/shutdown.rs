//! Shutdown coordination for the service.
//!
//! The flag is level-triggered: a listener created after `trigger` still
//! observes the shutdown instead of waiting forever.

use std::sync::Arc;

use tokio::sync::watch;

use crate::lifecycle::signals::wait_for_signal;

/// Owner side of the shutdown flag. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

/// Listener side handed to long-running tasks such as the HTTP server.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// A listener that resolves once shutdown has been triggered.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Raise the flag. Repeated calls are no-ops.
    pub fn trigger(&self) {
        let was_triggered = self.tx.send_replace(true);
        if !was_triggered {
            tracing::info!("Shutdown triggered");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Trigger once the process receives Ctrl+C or SIGTERM.
    pub fn trigger_on_signal(&self) {
        let shutdown = self.clone();
        tokio::spawn(async move {
            wait_for_signal().await;
            shutdown.trigger();
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Wait for the flag. Dropping every `Shutdown` handle also counts.
    pub async fn recv(&mut self) {
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
