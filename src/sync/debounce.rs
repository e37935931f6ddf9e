//! Cancellable Debounce Timer
//!
//! A handle that can be armed with a delay and a callback; arming again
//! atomically cancels the previous timer, so at most one timer is ever live.
//! Cancellation is by generation: each arm/cancel bumps a counter, and a
//! sleeping timer checks on expiry that it is still the latest generation
//! before firing. A superseded timer wakes, sees a newer generation, and
//! silently exits.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Re-armable single-shot timer
#[derive(Debug, Clone, Default)]
pub struct DebounceTimer {
    generation: Arc<AtomicU64>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, cancelling any previously armed one. After `delay`,
    /// `fire` runs on the runtime unless the timer was re-armed or cancelled
    /// in the meantime.
    pub fn arm<F, Fut>(&self, delay: Duration, fire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == armed {
                fire().await;
            }
        });
    }

    /// Cancel the pending timer, if any
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
