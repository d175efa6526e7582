//! Keyword debouncing.
//!
//! Rapid edits are coalesced: each new value replaces the pending one and
//! restarts the window, and only the latest value is emitted once the window
//! elapses without further edits. Intermediate values are never queued.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Default quiet period before a keyword reaches the filter pipeline.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalescing timer driven by explicit instants.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending value and restart the window. Returns the new deadline.
    pub fn push(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.pending = Some((value, deadline));
        deadline
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending value if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Take the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

/// Spawn a task debouncing everything sent on the returned sender.
///
/// Debounced values arrive on the returned receiver. Closing the sender
/// flushes a pending value immediately and ends the task.
/// Must be called inside a tokio runtime.
pub fn debounce_channel<T: Send + 'static>(
    window: Duration,
) -> (mpsc::UnboundedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<T>();
    let (output_tx, output_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        let mut debouncer = Debouncer::new(window);
        loop {
            let deadline = debouncer.deadline();
            tokio::select! {
                received = input_rx.recv() => match received {
                    Some(value) => {
                        debouncer.push(value, Instant::now());
                    }
                    None => {
                        if let Some(value) = debouncer.flush() {
                            let _ = output_tx.send(value);
                        }
                        break;
                    }
                },
                _ = wait_until(deadline) => {
                    if let Some(value) = debouncer.poll(Instant::now()) {
                        if output_tx.send(value).is_err() {
                            break;
                        }
                    }
                }
            }
        }
        debug!("Debounce task finished");
    });

    (input_tx, output_rx)
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
