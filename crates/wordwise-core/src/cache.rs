use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta};
use tokio::sync::RwLock;
use wordwise_config::cache::CacheConfig;
use wordwise_types::WordInfo;

use crate::clock::Clock;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: WordInfo,
    pub timestamp: DateTime<Local>,
}

/// In-memory word lookups keyed by normalized word.
/// Expired entries are skipped on read and replaced on the next insert.
pub struct WordCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl WordCache {
    pub fn new(ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn from_config(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let hours = i64::try_from(config.ttl_hours).unwrap_or(i64::MAX);
        let ttl = TimeDelta::try_hours(hours).unwrap_or_else(|| TimeDelta::days(365));
        Self::new(ttl, clock)
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Fresh entry for `word`, if any
    pub async fn get(&self, word: &str) -> Option<WordInfo> {
        let entries = self.entries.read().await;
        let entry = entries.get(word)?;

        let age = self.clock.now() - entry.timestamp;
        if age < self.ttl {
            Some(entry.data.clone())
        } else {
            tracing::debug!("Cache entry for {word:?} expired ({}s old)", age.num_seconds());
            None
        }
    }

    pub async fn insert(&self, word: String, data: WordInfo) {
        let entry = CacheEntry {
            data,
            timestamp: self.clock.now(),
        };
        self.entries.write().await.insert(word, entry);
    }

    /// Entries held, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
