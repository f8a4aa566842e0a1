//! Cancellable debounce timer
//!
//! A [`Debouncer`] holds at most one pending timer. Scheduling a new task
//! cancels the previous timer; dropping the debouncer cancels whatever is
//! pending. Once the quiet period has elapsed the task is detached onto its
//! own tokio task, so cancelling afterwards never interrupts work that has
//! already started.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Delays a task until no new task has been scheduled for `window`
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Cancel any pending timer and schedule `task` to run after the window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            tokio::spawn(task);
        }));
    }

    /// Cancel the pending timer, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                trace!("Cancelled pending debounce timer");
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_after_window() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(counting_task(&counter));
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_supersedes_previous_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(counting_task(&counter));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(counting_task(&counter));
        tokio::time::sleep(Duration::from_millis(1000)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.schedule(counting_task(&counter));
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_reports_whether_anything_was_pending() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        assert!(!debouncer.cancel());

        debouncer.schedule(counting_task(&counter));
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
    }
}
