//! Signal handling for the bridge runner

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Shutdown listener for the bridge runner
///
/// Handles OS shutdown signals (SIGINT/SIGTERM) and exposes them as a
/// channel the run loop can select on.
pub struct ShutdownListener {
    receiver: mpsc::Receiver<()>,
}

impl ShutdownListener {
    /// Create a new listener and start watching for shutdown signals
    pub fn new() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(1);

        // Setup SIGINT handler (shutdown)
        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = tx_int.send(()).await;
        });

        // Setup SIGTERM handler (shutdown)
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx.send(()).await;
        });

        Ok(Self { receiver: rx })
    }

    /// Wait until a shutdown signal arrives
    pub async fn recv(&mut self) {
        self.receiver.recv().await;
    }
}
