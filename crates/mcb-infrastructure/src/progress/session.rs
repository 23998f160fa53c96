//! Session-keyed progress channel: the HTTP/SSE transport
//! registers a channel per `mcp-session-id` and subscribes its SSE stream to
//! the receiving half; handlers look the sender up by session id so
//! `notify` never crosses into another session's stream.

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::ports::{ProgressChannel, ProgressEvent};
use mcb_domain::value_objects::SessionId;
use tokio::sync::mpsc;

/// The live table of session-bound SSE senders.
#[derive(Default)]
pub struct SessionProgressRegistry {
    senders: DashMap<SessionId, mpsc::UnboundedSender<ProgressEvent>>,
}

impl SessionProgressRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            senders: DashMap::new(),
        }
    }

    /// Register `session_id`'s SSE stream, returning the receiver half the
    /// transport should forward onto the wire. Replaces any prior
    /// registration for the same id (e.g. a reconnect).
    pub fn register(&self, session_id: SessionId) -> mpsc::UnboundedReceiver<ProgressEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.senders.insert(session_id, sender);
        receiver
    }

    /// Drop `session_id`'s registration on disconnect or termination.
    pub fn unregister(&self, session_id: &SessionId) {
        self.senders.remove(session_id);
    }

    /// Build a [`ProgressChannel`] handle bound to `session_id`. If no SSE
    /// stream is currently registered for that session, `notify` is a
    /// no-op.
    #[must_use]
    pub fn channel_for(&self, session_id: SessionId) -> SessionProgressChannel {
        SessionProgressChannel {
            session_id,
            senders: self,
        }
    }
}

/// A [`ProgressChannel`] that looks its sender up in the registry on every
/// `notify`, so it keeps working across an SSE stream's register/reconnect
/// cycle without the caller needing to rebuild it.
pub struct SessionProgressChannel<'a> {
    session_id: SessionId,
    senders: &'a SessionProgressRegistry,
}

#[async_trait]
impl ProgressChannel for SessionProgressChannel<'_> {
    async fn notify(&self, event: ProgressEvent) {
        if let Some(sender) = self.senders.senders.get(&self.session_id) {
            let _ = sender.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_the_registered_session_only() {
        let registry = SessionProgressRegistry::new();
        let session_a = SessionId::new();
        let session_b = SessionId::new();

        let mut receiver_a = registry.register(session_a);
        let _receiver_b = registry.register(session_b);

        registry
            .channel_for(session_a)
            .notify(ProgressEvent::status("running", "for a"))
            .await;

        let event = receiver_a.recv().await.unwrap();
        assert_eq!(event.message.as_deref(), Some("for a"));
    }

    #[tokio::test]
    async fn unregistered_session_is_a_silent_no_op() {
        let registry = SessionProgressRegistry::new();
        let session = SessionId::new();
        registry
            .channel_for(session)
            .notify(ProgressEvent::status("running", "nobody listening"))
            .await;
    }
}
