//! In-memory participant and message store

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::instrument;

use chatroom_core::{
    DomainError, Message, MessageRepository, NewMessage, Participant, ParticipantName,
    ParticipantRepository, RepoResult, StoreHealth,
};

/// In-memory store for participants and messages
///
/// Participants live in a `DashMap` keyed by name so that insert-if-absent is
/// a single atomic entry operation. Messages are an append-only vector whose
/// ids are assigned under the write lock, keeping id order equal to log order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: DashMap<ParticipantName, DateTime<Utc>>,
    messages: RwLock<Vec<Message>>,
    next_message_id: AtomicI64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of participants currently stored
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Full message log in insertion order
    pub fn messages(&self) -> Vec<Message> {
        self.messages.read().clone()
    }
}

#[async_trait]
impl ParticipantRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Participant>> {
        let mut participants: Vec<Participant> = self
            .participants
            .iter()
            .map(|entry| Participant::new(entry.key().clone(), *entry.value()))
            .collect();
        participants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(participants)
    }

    async fn find_by_name(&self, name: &ParticipantName) -> RepoResult<Option<Participant>> {
        Ok(self
            .participants
            .get(name)
            .map(|entry| Participant::new(entry.key().clone(), *entry.value())))
    }

    #[instrument(skip(self), fields(name = %participant.name))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        match self.participants.entry(participant.name.clone()) {
            Entry::Occupied(_) => Err(DomainError::ParticipantNameTaken(
                participant.name.to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(participant.last_active);
                Ok(())
            }
        }
    }

    async fn touch(&self, name: &ParticipantName, at: DateTime<Utc>) -> RepoResult<bool> {
        match self.participants.get_mut(name) {
            Some(mut last_active) => {
                *last_active = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_if_inactive(
        &self,
        name: &ParticipantName,
        last_active: DateTime<Utc>,
    ) -> RepoResult<bool> {
        Ok(self
            .participants
            .remove_if(name, |_, seen| *seen == last_active)
            .is_some())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn append(&self, message: NewMessage) -> RepoResult<Message> {
        let mut log = self.messages.write();
        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Message::from_new(id, message);
        log.push(stored.clone());
        Ok(stored)
    }

    async fn find_visible_to(&self, user: &str, limit: Option<i64>) -> RepoResult<Vec<Message>> {
        let take = limit.map_or(usize::MAX, |l| usize::try_from(l.max(0)).unwrap_or(usize::MAX));
        Ok(self
            .messages
            .read()
            .iter()
            .rev()
            .filter(|m| m.is_visible_to(user))
            .take(take)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatroom_core::{MessageKind, BROADCAST_RECIPIENT};
    use chrono::Duration;
    use std::sync::Arc;

    fn name(s: &str) -> ParticipantName {
        ParticipantName::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        let now = Utc::now();
        store.create(&Participant::new(name("Ann"), now)).await.unwrap();

        let found = store.find_by_name(&name("Ann")).await.unwrap().unwrap();
        assert_eq!(found.last_active, now);
        assert!(store.find_by_name(&name("Bob")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected() {
        let store = MemoryStore::new();
        let now = Utc::now();
        store.create(&Participant::new(name("Ann"), now)).await.unwrap();

        let err = store
            .create(&Participant::new(name("Ann"), now + Duration::seconds(1)))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        // The original entry is untouched
        let found = store.find_by_name(&name("Ann")).await.unwrap().unwrap();
        assert_eq!(found.last_active, now);
    }

    #[tokio::test]
    async fn test_concurrent_creates_admit_one() {
        let store = Arc::new(MemoryStore::new());
        let now = Utc::now();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    let participant = Participant::new(name("Bob"), now);
                    let result = store.create(&participant).await;
                    result
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.participant_count(), 1);
    }

    #[tokio::test]
    async fn test_touch_and_delete_unknown() {
        let store = MemoryStore::new();
        assert!(!store.touch(&name("Ghost"), Utc::now()).await.unwrap());
        assert!(!store
            .delete_if_inactive(&name("Ghost"), Utc::now())
            .await
            .unwrap());
        assert_eq!(store.participant_count(), 0);
    }

    #[tokio::test]
    async fn test_touch_updates_last_active() {
        let store = MemoryStore::new();
        let t0 = Utc::now();
        store.create(&Participant::new(name("Ann"), t0)).await.unwrap();

        let t1 = t0 + Duration::seconds(5);
        assert!(store.touch(&name("Ann"), t1).await.unwrap());
        let found = store.find_by_name(&name("Ann")).await.unwrap().unwrap();
        assert_eq!(found.last_active, t1);
    }

    #[tokio::test]
    async fn test_delete_if_inactive_skips_touched_participant() {
        let store = MemoryStore::new();
        let t0 = Utc::now();
        let t1 = t0 + Duration::seconds(8);
        store.create(&Participant::new(name("Ann"), t0)).await.unwrap();
        store.touch(&name("Ann"), t1).await.unwrap();

        assert!(!store.delete_if_inactive(&name("Ann"), t0).await.unwrap());
        assert_eq!(store.participant_count(), 1);

        assert!(store.delete_if_inactive(&name("Ann"), t1).await.unwrap());
        assert_eq!(store.participant_count(), 0);
    }

    #[tokio::test]
    async fn test_messages_newest_first_with_visibility() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let ann = name("Ann");

        store.append(NewMessage::arrival(&ann, now)).await.unwrap();
        store
            .append(NewMessage::new(&ann, "Bob", "psst", MessageKind::PrivateMessage, now))
            .await
            .unwrap();
        store
            .append(NewMessage::new(&ann, BROADCAST_RECIPIENT, "oi", MessageKind::Message, now))
            .await
            .unwrap();

        let for_carl = store.find_visible_to("Carl", None).await.unwrap();
        assert_eq!(for_carl.len(), 2);
        assert_eq!(for_carl[0].text, "oi");
        assert!(for_carl[0].id > for_carl[1].id);

        let for_bob = store.find_visible_to("Bob", Some(2)).await.unwrap();
        assert_eq!(for_bob.len(), 2);
        assert_eq!(for_bob[1].text, "psst");
    }
}
