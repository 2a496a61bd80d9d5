//! Trailing-edge debouncing of a rapidly changing value.
//!
//! [`Debouncer::spawn`] starts a background task and hands back the receiver
//! of settled values. Every [`push`](Debouncer::push) restarts the quiet
//! period; a value is forwarded only after `delay` passes with no newer one.
//! Dropping the debouncer (or calling [`cancel`](Debouncer::cancel)) discards
//! any pending value.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Default quiet period for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle used to feed raw values into a running debounce task.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    cancel: CancellationToken,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task on the current runtime.
    ///
    /// Returns the handle and the receiver of settled values. The receiver
    /// yields `None` once the debouncer has been torn down.
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        tokio::spawn(run(delay, input_rx, settled_tx, cancel.clone()));

        (
            Self {
                input: input_tx,
                cancel,
            },
            settled_rx,
        )
    }
}

impl<T> Debouncer<T> {
    /// Submit a new raw value, superseding any pending one.
    pub fn push(&self, value: T) {
        // Send only fails after teardown, when the value must be dropped anyway.
        let _ = self.input.send(value);
    }

    /// Stop the task and discard the pending value, if any.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the debouncer has been torn down.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run<T>(
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    settled: mpsc::UnboundedSender<T>,
    cancel: CancellationToken,
) {
    let mut pending: Option<T> = None;

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            next = input.recv() => match next {
                Some(value) => pending = Some(value),
                None => break,
            },
            () = tokio::time::sleep(delay), if pending.is_some() => {
                if let Some(value) = pending.take() {
                    if settled.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn rapid_values_coalesce_to_the_last_one() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        for value in ["b", "ba", "bat", "batm", "batman"] {
            debouncer.push(value.to_string());
            sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(settled.recv().await.as_deref(), Some("batman"));

        sleep(Duration::from_secs(5)).await;
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn value_settles_only_after_quiet_period() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        let start = Instant::now();
        debouncer.push(1);
        let value = settled.recv().await;

        assert_eq!(value, Some(1));
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn every_push_restarts_the_timer() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        let start = Instant::now();
        debouncer.push(1);
        sleep(Duration::from_millis(400)).await;
        debouncer.push(2);

        assert_eq!(settled.recv().await, Some(2));
        assert!(start.elapsed() >= Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn separated_values_are_each_emitted() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        debouncer.push("dune");
        assert_eq!(settled.recv().await, Some("dune"));

        debouncer.push("");
        assert_eq!(settled.recv().await, Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_discards_pending_value() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        debouncer.push("pending");
        drop(debouncer);

        assert_eq!(settled.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_value() {
        let (debouncer, mut settled) = Debouncer::spawn(DELAY);

        debouncer.push("pending");
        debouncer.cancel();

        assert!(debouncer.is_cancelled());
        assert_eq!(settled.recv().await, None);
    }
}
