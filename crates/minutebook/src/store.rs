//! Durable mirror of the meeting collection.
//!
//! The whole collection is stored as one JSON array under a fixed key and is
//! rewritten in full on every save. Loading never fails: an absent value is
//! replaced by the seed dataset, and an unreadable one is treated as an empty
//! collection.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::meeting::Meeting;
use crate::seed::seed_meetings;
use crate::storage::KeyValueStore;

/// Loads and saves the meeting collection through a [`KeyValueStore`].
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Create a record store keeping the collection under `key`.
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The key holding the collection.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted collection.
    ///
    /// - Nothing stored yet: the seed dataset is written and returned.
    /// - Stored value does not parse, or the backend cannot be read: an empty
    ///   collection is returned and the stored value is left untouched.
    #[must_use]
    pub fn load(&self) -> Vec<Meeting> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Could not read meetings under key {}: {}", self.key, err);
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            let seed = seed_meetings();
            info!("No stored meetings under key {}, seeding", self.key);
            if let Err(err) = self.save(&seed) {
                warn!("Could not persist seed meetings: {}", err);
            }
            return seed;
        };

        match serde_json::from_str::<Vec<Meeting>>(&raw) {
            Ok(meetings) => {
                debug!("Loaded {} meetings from key {}", meetings.len(), self.key);
                meetings
            }
            Err(err) => {
                warn!(
                    "Stored meetings under key {} are malformed, starting empty: {}",
                    self.key, err
                );
                Vec::new()
            }
        }
    }

    /// Serialize and store the full collection, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&self, meetings: &[Meeting]) -> Result<()> {
        let raw = serde_json::to_string(meetings)?;
        self.backend.set(&self.key, &raw)?;
        debug!("Saved {} meetings under key {}", meetings.len(), self.key);
        Ok(())
    }
}
