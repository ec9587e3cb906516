//! Delayed one-shot update check.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::ipc::ChannelSender;
use crate::protocol::outbound;

/// Handle to the scheduled check.
///
/// The check itself is a one-shot timer that sends `updater.init` on the
/// self-addressed channel. Current callers never cancel it; the handle
/// exists so shutdown can abort a pending check and tests can drive the
/// timer deterministically.
#[derive(Debug)]
pub struct UpdateCheckHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl UpdateCheckHandle {
    /// Cancel the check if it has not fired yet.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        self.task.abort();
    }

    /// Wait for the timer task to finish. Test convenience.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Schedule a single `updater.init` send after `delay`.
///
/// Fire-and-forget: if the send fails the check is simply lost, there is no
/// retry and no recurrence.
pub fn schedule_update_check(self_channel: ChannelSender, delay: Duration) -> UpdateCheckHandle {
    let (cancel_tx, cancel_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                tracing::info!(delay_ms = delay.as_millis() as u64, "Requesting update check");
                self_channel.send(outbound::updater_init());
            }
            _ = cancel_rx => {
                tracing::debug!("Scheduled update check cancelled");
            }
        }
    });

    UpdateCheckHandle {
        cancel: Some(cancel_tx),
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::channel_pair;

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (tx, mut rx) = channel_pair("msg", 4);
        let handle = schedule_update_check(tx, Duration::from_millis(3000));

        // Nothing before the deadline.
        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_none());

        tokio::time::advance(Duration::from_millis(1)).await;
        handle.join().await;

        assert_eq!(rx.recv().await.unwrap().kind, "updater.init");
        assert!(rx.try_recv().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_deadline_suppresses_send() {
        let (tx, mut rx) = channel_pair("msg", 4);
        let handle = schedule_update_check(tx, Duration::from_millis(3000));

        tokio::time::advance(Duration::from_millis(1000)).await;
        handle.cancel();

        tokio::time::advance(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_none());
    }
}
