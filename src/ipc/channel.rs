//! Named fire-and-forget channels.

use tokio::sync::mpsc;

use crate::ipc::envelope::Envelope;

/// Sending half of a named channel.
///
/// Cheap to clone; every subsystem that emits messages holds its own copy.
#[derive(Debug, Clone)]
pub struct ChannelSender {
    name: &'static str,
    tx: mpsc::Sender<Envelope>,
}

impl ChannelSender {
    /// Channel name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Send an envelope, fire-and-forget.
    ///
    /// A full or closed channel is logged and swallowed: sends at this layer
    /// carry no delivery guarantee and are never retried.
    pub fn send(&self, envelope: Envelope) {
        match self.tx.try_send(envelope) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(env)) => {
                tracing::warn!(channel = self.name, kind = %env.kind, "Channel full, message dropped");
            }
            Err(mpsc::error::TrySendError::Closed(env)) => {
                tracing::warn!(channel = self.name, kind = %env.kind, "Channel closed, message dropped");
            }
        }
    }
}

/// Receiving half of a named channel. Single consumer.
#[derive(Debug)]
pub struct ChannelReceiver {
    name: &'static str,
    rx: mpsc::Receiver<Envelope>,
}

impl ChannelReceiver {
    /// Channel name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Receive the next envelope, or `None` once all senders are gone.
    pub async fn recv(&mut self) -> Option<Envelope> {
        self.rx.recv().await
    }

    /// Non-blocking receive, for tests and drain loops.
    pub fn try_recv(&mut self) -> Option<Envelope> {
        self.rx.try_recv().ok()
    }
}

/// Create a named channel with the given buffer capacity.
pub fn channel_pair(name: &'static str, capacity: usize) -> (ChannelSender, ChannelReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (ChannelSender { name, tx }, ChannelReceiver { name, rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_and_recv() {
        let (tx, mut rx) = channel_pair("usb", 4);
        tx.send(Envelope::bare("devices.all"));
        tx.send(Envelope::bare("devices.listen"));

        assert_eq!(rx.recv().await.unwrap().kind, "devices.all");
        assert_eq!(rx.recv().await.unwrap().kind, "devices.listen");
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped_is_swallowed() {
        let (tx, rx) = channel_pair("usb", 4);
        drop(rx);
        // Must not panic or error.
        tx.send(Envelope::bare("devices.all"));
    }

    #[tokio::test]
    async fn test_full_channel_drops_message() {
        let (tx, mut rx) = channel_pair("usb", 1);
        tx.send(Envelope::bare("one"));
        tx.send(Envelope::bare("two"));

        assert_eq!(rx.try_recv().unwrap().kind, "one");
        assert!(rx.try_recv().is_none());
    }
}
