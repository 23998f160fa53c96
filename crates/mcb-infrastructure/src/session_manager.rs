//! Session Manager: binds a per-connection [`Session`] on
//! `init-memory-bank`, and enforces that every later call has one. The
//! session table is a single shared map — `DashMap`'s internal sharding gives the same external
//! no-torn-read guarantee as one `Mutex<HashMap<_>>` while letting
//! independent sessions proceed without contending on each other.

use dashmap::DashMap;
use mcb_domain::error::{Error, Result};
use mcb_domain::value_objects::SessionId;
use mcb_domain::Session;

/// The live session table, shared across every transport connection.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<SessionId, Session>,
}

impl SessionManager {
    /// Construct an empty session table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Bind a newly established session (an `init-memory-bank` call).
    /// Overwrites any prior session recorded under the same id.
    pub fn bind(&self, session: Session) {
        self.sessions.insert(session.id, session);
    }

    /// Look up the session bound to `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SessionUnbound` if no session is bound under `id`.
    pub fn require(&self, id: &SessionId) -> Result<Session> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::session_unbound(format!("no session bound for id '{id}'")))
    }

    /// Look up the session bound to `id`, if any.
    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Release a session on explicit termination or transport disconnect
    ///. Safe to call on an id with no bound session.
    pub fn terminate(&self, id: &SessionId) {
        self.sessions.remove(id);
    }

    /// Number of currently bound sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the session table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_session(id: SessionId) -> Session {
        Session::new(id, PathBuf::from("/tmp/project"), "acme/widgets", None)
    }

    #[test]
    fn unbound_session_is_reported() {
        let manager = SessionManager::new();
        let id = SessionId::new();
        assert!(manager.require(&id).is_err());
    }

    #[test]
    fn bound_session_round_trips() {
        let manager = SessionManager::new();
        let id = SessionId::new();
        manager.bind(sample_session(id.clone()));
        let session = manager.require(&id).unwrap();
        assert_eq!(session.repository, "acme/widgets");
        manager.terminate(&id);
        assert!(manager.get(&id).is_none());
    }
}
