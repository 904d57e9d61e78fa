//! Participant entity - someone currently present in the room

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::ParticipantName;

/// Participant entity, keyed by its unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: ParticipantName,
    pub last_active: DateTime<Utc>,
}

impl Participant {
    /// Create a participant that was last active at `now`
    pub fn new(name: ParticipantName, now: DateTime<Utc>) -> Self {
        Self {
            name,
            last_active: now,
        }
    }

    /// Time elapsed since the last heartbeat
    ///
    /// Clamped to zero when `now` is before `last_active` (clock skew between
    /// writers).
    pub fn inactive_for(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_active).max(Duration::zero())
    }

    /// Whether the participant has been inactive for strictly longer than `timeout`
    #[inline]
    pub fn is_stale(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        self.inactive_for(now) > timeout
    }
}
