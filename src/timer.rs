//! Delays and cancellable scheduled work.

use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Cancellation side of a scheduled future.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
    finished: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    /// The wrapped future has resolved, with a value or cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    fn is_live(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }
}

/// Wrap `future` so it can be stopped through the returned handle. The
/// wrapped future yields `None` when cancelled before completion.
pub fn cancellable<F>(future: F) -> (TaskHandle, impl Future<Output = Option<F::Output>>)
where
    F: Future,
{
    let (abort, registration) = AbortHandle::new_pair();
    let guarded = Abortable::new(future, registration);
    let finished = Arc::new(AtomicBool::new(false));
    let handle = TaskHandle {
        abort,
        finished: finished.clone(),
    };
    (handle, async move {
        let output = guarded.await.ok();
        finished.store(true, Ordering::Release);
        output
    })
}

/// Resolve to `value` after `delay`, unless cancelled first.
pub fn delayed<T>(delay: Duration, value: T) -> (TaskHandle, impl Future<Output = Option<T>>) {
    cancellable(async move {
        sleep(delay).await;
        value
    })
}

/// Owner of every pending task started by one component. Dropping the set
/// cancels whatever is still outstanding.
#[derive(Debug, Default)]
pub struct TaskSet {
    handles: Vec<TaskHandle>,
}

impl TaskSet {
    pub fn track(&mut self, handle: TaskHandle) {
        self.prune();
        self.handles.push(handle);
    }

    /// Forget handles whose task already resolved or was cancelled.
    pub fn prune(&mut self) {
        self.handles.retain(TaskHandle::is_live);
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!(pending = self.handles.len(), "cancelling pending tasks");
        }
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delayed_resolves() {
        let (_handle, task) = delayed(Duration::from_millis(5), 7);
        assert_eq!(task.await, Some(7));
    }

    #[tokio::test]
    async fn test_cancel_before_completion() {
        let (handle, task) = delayed(Duration::from_millis(50), "late");
        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(task.await, None);
    }

    #[tokio::test]
    async fn test_finished_flag_set_on_resolve() {
        let (handle, task) = delayed(Duration::ZERO, ());
        assert!(!handle.is_finished());
        task.await;
        assert!(handle.is_finished());
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn test_resolved_handles_do_not_accumulate() {
        let mut set = TaskSet::default();
        for i in 0..100 {
            let (handle, task) = delayed(Duration::ZERO, i);
            set.track(handle);
            assert_eq!(task.await, Some(i));
        }
        assert!(set.len() <= 1, "len = {}", set.len());

        set.prune();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_pending_handles_survive_prune() {
        let (slow, _slow_task) = delayed(Duration::from_secs(60), ());
        let (fast, fast_task) = delayed(Duration::ZERO, ());
        let mut set = TaskSet::default();
        set.track(slow.clone());
        set.track(fast);
        fast_task.await;

        set.prune();
        assert_eq!(set.len(), 1);
        drop(set);
        assert!(slow.is_cancelled());
    }

    #[tokio::test]
    async fn test_dropping_set_cancels_tracked() {
        let (handle, task) = delayed(Duration::from_millis(50), ());
        {
            let mut set = TaskSet::default();
            set.track(handle.clone());
            assert_eq!(set.len(), 1);
        }
        assert!(handle.is_cancelled());
        assert_eq!(task.await, None);
    }
}
