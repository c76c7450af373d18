//! TTL cache bridging the search POST and the follow-up results GET.
//!
//! Each completed search is stored once under a fresh UUID and handed out
//! once: `take` removes the entry, so a key can never be replayed. Expired
//! entries are swept opportunistically on every insert.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clubfind_query::SearchOutcome;
use uuid::Uuid;

struct Entry {
    stored_at: Instant,
    outcome: SearchOutcome,
}

pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, Entry>>,
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Stores an outcome and returns the key the client must present to
    /// retrieve it.
    pub fn insert(&self, outcome: SearchOutcome) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            id,
            Entry {
                stored_at: Instant::now(),
                outcome,
            },
        );
        id
    }

    /// Removes and returns the outcome for `id`, if present and unexpired.
    pub fn take(&self, id: Uuid) -> Option<SearchOutcome> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let entry = entries.remove(&id)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.outcome)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
