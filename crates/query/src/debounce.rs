//! Input debouncing.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Publishes the latest pushed value once no new value arrived for `delay`.
///
/// Values superseded within the delay are dropped. Must be created inside a
/// tokio runtime; the background task ends when the debouncer is dropped.
pub struct Debouncer<T> {
    input: watch::Sender<T>,
    output: watch::Receiver<T>,
    delay: Duration,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, input_rx) = watch::channel(initial.clone());
        let (output_tx, output) = watch::channel(initial);
        let task = tokio::spawn(debounce(input_rx, output_tx, delay));

        Self {
            input,
            output,
            delay,
            task,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&self, value: T) {
        self.input.send_replace(value);
    }

    /// Most recently pushed value, debounced or not.
    pub fn pending(&self) -> T {
        self.input.borrow().clone()
    }

    /// Last published value.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }

    /// Wait until the latest pushed value has been published.
    pub async fn settled(&self) -> T {
        let target = self.pending();
        let mut output = self.output.clone();
        let settled = match output.wait_for(|value| *value == target).await {
            Ok(value) => value.clone(),
            Err(_) => target,
        };
        settled
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn debounce<T>(mut input: watch::Receiver<T>, output: watch::Sender<T>, delay: Duration)
where
    T: Clone + PartialEq,
{
    loop {
        if input.changed().await.is_err() {
            return;
        }

        // restart the quiet period on every new value
        loop {
            tokio::select! {
                changed = input.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(delay) => break,
            }
        }

        let value = input.borrow_and_update().clone();
        output.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}
