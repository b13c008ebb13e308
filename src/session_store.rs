//! In-memory session storage keyed by chat.
//!
//! Sessions live only in process memory. Each chat's entry sits in its own
//! shard of a [`DashMap`], so chats never wait on each other. Idle sessions
//! expire after the configured timeout.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;
use teloxide::types::ChatId;
use tracing::debug;

use crate::dialogue::SubmissionState;
use crate::draft::Draft;

/// One chat's position in the dialogue together with its draft
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub chat_id: ChatId,
    pub state: SubmissionState,
    pub draft: Draft,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Fresh session waiting for a location
    pub fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            state: SubmissionState::AskLocation,
            draft: Draft::default(),
            last_activity: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<ChatId, Session>,
    idle_timeout: Option<Duration>,
}

impl SessionStore {
    /// Create a store; `None` keeps sessions until they finish
    pub fn new(idle_timeout: Option<Duration>) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    pub fn get(&self, chat_id: ChatId) -> Option<Session> {
        self.get_at(chat_id, Utc::now())
    }

    /// Look up a session as of `now`, dropping it if it has expired
    pub fn get_at(&self, chat_id: ChatId, now: DateTime<Utc>) -> Option<Session> {
        if self
            .sessions
            .remove_if(&chat_id, |_, session| self.is_expired(session, now))
            .is_some()
        {
            debug!(chat_id = %chat_id, "Session expired");
            return None;
        }

        self.sessions.get(&chat_id).map(|entry| entry.value().clone())
    }

    /// Store a session, returning the one it replaced
    pub fn put(&self, session: Session) -> Option<Session> {
        self.sessions.insert(session.chat_id, session)
    }

    pub fn delete(&self, chat_id: ChatId) -> Option<Session> {
        self.sessions.remove(&chat_id).map(|(_, session)| session)
    }

    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now())
    }

    /// Remove every session idle past the timeout as of `now`
    pub fn sweep_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.sessions.retain(|_, session| {
            let keep = !self.is_expired(session, now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        let Some(timeout) = self.idle_timeout else {
            return false;
        };

        // A negative idle time (clock moved back) never expires
        now.signed_duration_since(session.last_activity)
            .to_std()
            .map(|idle| idle > timeout)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_replaces_existing_session() {
        let store = SessionStore::new(None);
        let mut first = Session::new(ChatId(1));
        first.draft.location = "Arc B2".to_string();
        store.put(first.clone());

        let replaced = store.put(Session::new(ChatId(1)));
        assert_eq!(replaced, Some(first));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ChatId(1)).map(|s| s.draft), Some(Draft::default()));
    }

    #[test]
    fn test_delete_removes_session() {
        let store = SessionStore::new(None);
        store.put(Session::new(ChatId(7)));
        assert!(store.delete(ChatId(7)).is_some());
        assert!(store.get(ChatId(7)).is_none());
        assert!(store.delete(ChatId(7)).is_none());
    }

    #[test]
    fn test_no_timeout_never_expires() {
        let store = SessionStore::new(None);
        store.put(Session::new(ChatId(3)));
        let far_future = Utc::now() + chrono::Duration::days(365);
        assert!(store.get_at(ChatId(3), far_future).is_some());
        assert_eq!(store.sweep_expired_at(far_future), 0);
    }
}
