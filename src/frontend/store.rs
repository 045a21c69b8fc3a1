use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use super::session::SessionState;

pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);
pub const MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
struct StoredSession {
    state: SessionState,
    last_touched: Instant,
}

/// In-memory form sessions. Idle entries expire after `ttl` and the map never
/// holds more than `capacity` entries; the least recently touched goes first.
pub struct SessionStore {
    entries: DashMap<String, StoredSession>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_TTL, MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Live session by id. Expired entries read as absent.
    pub fn get(&self, id: &str) -> Option<SessionState> {
        self.get_at(id, Instant::now())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn insert(&self, id: String, state: SessionState) {
        self.insert_at(id, state, Instant::now())
    }

    fn get_at(&self, id: &str, now: Instant) -> Option<SessionState> {
        self.entries
            .get(id)
            .filter(|entry| now.saturating_duration_since(entry.last_touched) <= self.ttl)
            .map(|entry| entry.state.clone())
    }

    fn insert_at(&self, id: String, state: SessionState, now: Instant) {
        if !self.entries.contains_key(&id) {
            self.prune(now);
            while self.entries.len() >= self.capacity {
                let oldest = self
                    .entries
                    .iter()
                    .min_by_key(|entry| entry.last_touched)
                    .map(|entry| entry.key().clone());
                match oldest {
                    Some(key) => {
                        debug!("Evicting session {}", key);
                        self.entries.remove(&key);
                    }
                    None => break,
                }
            }
        }
        self.entries.insert(
            id,
            StoredSession {
                state,
                last_touched: now,
            },
        );
    }

    fn prune(&self, now: Instant) {
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.last_touched) <= self.ttl);
    }
}
