//! Background task helpers for the immediate-mode UI loop.
//!
//! egui redraws every frame and cannot await, so async work is spawned on the
//! tokio runtime and its handle is checked once per frame.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Outcome of checking an optional task handle
pub enum PollResult<T> {
    /// Nothing is running
    NoTask,
    /// Still running; the handle stays in place
    Pending,
    /// Finished; the handle has been taken out of the slot
    Complete(Result<T, JoinError>),
}

/// Check a task slot without blocking.
///
/// A finished handle is removed from the slot and its output returned, so a
/// given task completes exactly once. The handle is polled in place and only
/// taken once its output is in hand; polling runs outside tokio's coop budget
/// because the UI thread never yields back to the runtime to refill it.
pub fn poll_task<T>(slot: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = slot.as_mut() else {
        return PollResult::NoTask;
    };
    if !handle.is_finished() {
        return PollResult::Pending;
    }

    let output = tokio::task::unconstrained(handle).now_or_never();
    match output {
        Some(result) => {
            slot.take();
            PollResult::Complete(result)
        }
        None => {
            tracing::warn!("Task reported finished but output was not ready");
            PollResult::Pending
        }
    }
}

/// Abort whatever is in the slot and leave it empty.
///
/// Returns true if a task was still running.
pub fn abort_task<T>(slot: &mut Option<JoinHandle<T>>) -> bool {
    match slot.take() {
        Some(handle) => {
            let running = !handle.is_finished();
            handle.abort();
            running
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_slot() {
        let mut slot: Option<JoinHandle<u32>> = None;
        assert!(matches!(poll_task(&mut slot), PollResult::NoTask));
        assert!(!abort_task(&mut slot));
    }

    #[tokio::test]
    async fn test_completed_task_is_taken() {
        let mut slot = Some(tokio::spawn(async { 7u32 }));
        tokio::time::sleep(Duration::from_millis(20)).await;
        while matches!(poll_task(&mut slot), PollResult::Pending) {
            tokio::task::yield_now().await;
        }
        assert!(slot.is_none());
    }

    #[test]
    fn test_many_tasks_settle_from_a_loop_that_never_yields() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();

        // Mirrors the UI thread: inside block_on, polling without ever awaiting
        rt.block_on(async {
            for i in 0..300u32 {
                let mut slot = Some(tokio::spawn(async move { i }));
                let mut output = None;
                for _ in 0..500 {
                    match poll_task(&mut slot) {
                        PollResult::Complete(result) => {
                            output = Some(result.unwrap());
                            break;
                        }
                        PollResult::Pending => std::thread::sleep(Duration::from_millis(1)),
                        PollResult::NoTask => panic!("task {} lost before completing", i),
                    }
                }
                assert_eq!(output, Some(i), "task {} never completed", i);
                assert!(slot.is_none());
            }
        });
    }

    #[tokio::test]
    async fn test_abort_running_task() {
        let mut slot = Some(tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }));
        assert!(matches!(poll_task(&mut slot), PollResult::Pending));
        assert!(abort_task(&mut slot));
        assert!(slot.is_none());
    }
}
