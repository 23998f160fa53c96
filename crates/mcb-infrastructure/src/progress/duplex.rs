//! Line-delimited duplex progress channel: events are
//! forwarded over an unbounded queue that the stdio transport drains and
//! writes as discrete notification lines, preserving emission order.

use async_trait::async_trait;
use mcb_domain::ports::{ProgressChannel, ProgressEvent};
use tokio::sync::mpsc;

/// A [`ProgressChannel`] that forwards every event onto an
/// `mpsc::UnboundedSender`. `notify` never fails the caller — a closed
/// receiver (the connection already dropped) is silently swallowed
///.
#[derive(Clone)]
pub struct DuplexProgressChannel {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

impl DuplexProgressChannel {
    /// Build a channel paired with its receiving half. The caller is
    /// expected to drain the receiver on the same connection the events
    /// originated from, writing each as a line.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl ProgressChannel for DuplexProgressChannel {
    async fn notify(&self, event: ProgressEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_arrive_in_order() {
        let (channel, mut receiver) = DuplexProgressChannel::new();
        channel.notify(ProgressEvent::status("start", "begin")).await;
        channel.notify(ProgressEvent::status("iterating", "step 1")).await;
        channel
            .notify(ProgressEvent {
                status: "done".to_string(),
                message: None,
                percent: Some(100.0),
                is_final: true,
                data: None,
            })
            .await;

        assert_eq!(receiver.recv().await.unwrap().status, "start");
        assert_eq!(receiver.recv().await.unwrap().status, "iterating");
        let last = receiver.recv().await.unwrap();
        assert_eq!(last.status, "done");
        assert!(last.is_final);
    }

    #[tokio::test]
    async fn notify_after_receiver_dropped_does_not_panic() {
        let (channel, receiver) = DuplexProgressChannel::new();
        drop(receiver);
        channel.notify(ProgressEvent::status("start", "begin")).await;
    }
}
