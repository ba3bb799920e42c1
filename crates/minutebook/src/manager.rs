//! The record manager: sole owner of the in-memory meeting collection.
//!
//! Every mutation goes through [`RecordManager`], which applies it to the
//! collection and then writes the whole collection back through its
//! [`RecordStore`]. Writes are fire-and-forget: a failed save is logged and
//! the in-memory state stays authoritative for the rest of the session.
//!
//! Operations on an unknown id are silent no-ops.

use tracing::{debug, error, info};

use crate::filter::MeetingFilter;
use crate::meeting::{ActionStatus, Meeting, MeetingDraft, MeetingPatch, MeetingStatus};
use crate::storage::KeyValueStore;
use crate::store::RecordStore;

/// Owns the meeting collection (newest first) and keeps its durable mirror in sync.
#[derive(Debug)]
pub struct RecordManager<S> {
    store: RecordStore<S>,
    meetings: Vec<Meeting>,
}

impl<S: KeyValueStore> RecordManager<S> {
    /// Load the collection from `store` (seeding it on first run).
    pub fn open(store: RecordStore<S>) -> Self {
        let meetings = store.load();
        info!("Record manager ready with {} meetings", meetings.len());
        Self { store, meetings }
    }

    /// The current collection, newest first.
    #[must_use]
    pub fn list(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Meetings matching `filter`, in collection order.
    #[must_use]
    pub fn search(&self, filter: &MeetingFilter) -> Vec<&Meeting> {
        filter.apply(&self.meetings)
    }

    /// Look up one meeting.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// Borrow the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Create a meeting from `draft`, put it at the front of the collection and persist.
    pub fn create(&mut self, draft: MeetingDraft) -> &Meeting {
        let mut meeting = Meeting::from_draft(draft);
        while self.get(&meeting.id).is_some() {
            meeting.id = crate::meeting::generate_id();
        }

        info!("Created meeting {}", meeting.id);
        self.meetings.insert(0, meeting);
        self.persist();
        &self.meetings[0]
    }

    /// Merge `patch` into the meeting with `id`, keeping its position, and persist.
    ///
    /// Returns `None` without touching anything if no such meeting exists.
    pub fn update(&mut self, id: &str, patch: MeetingPatch) -> Option<&Meeting> {
        let Some(index) = self.meetings.iter().position(|m| m.id == id) else {
            debug!("Update skipped, no meeting {}", id);
            return None;
        };

        self.meetings[index].apply_update(patch);
        info!("Updated meeting {}", id);
        self.persist();
        Some(&self.meetings[index])
    }

    /// Remove the meeting with `id` and persist.
    ///
    /// Callers are expected to have obtained the user's confirmation first;
    /// deletion cannot be undone. Returns `false` (and writes nothing) if no
    /// such meeting exists.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.meetings.len();
        self.meetings.retain(|m| m.id != id);

        if self.meetings.len() == before {
            debug!("Delete skipped, no meeting {}", id);
            return false;
        }

        info!("Deleted meeting {}", id);
        self.persist();
        true
    }

    /// Counts for dashboard cards.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            meetings: self.meetings.len(),
            ..Summary::default()
        };

        for meeting in &self.meetings {
            match meeting.status {
                MeetingStatus::Scheduled => summary.scheduled += 1,
                MeetingStatus::Completed => summary.completed += 1,
                MeetingStatus::Cancelled => summary.cancelled += 1,
            }
            summary.decisions += meeting.decisions.len();
            for item in &meeting.action_items {
                summary.action_items += 1;
                match item.status {
                    ActionStatus::Pending => summary.actions_pending += 1,
                    ActionStatus::InProgress => summary.actions_in_progress += 1,
                    ActionStatus::Completed => summary.actions_completed += 1,
                }
            }
        }

        summary
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.meetings) {
            error!(
                "Failed to persist {} meetings under key {}: {}",
                self.meetings.len(),
                self.store.key(),
                err
            );
        }
    }
}

/// Aggregate counts over the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    /// Total meetings.
    pub meetings: usize,
    /// Meetings still scheduled.
    pub scheduled: usize,
    /// Meetings held.
    pub completed: usize,
    /// Meetings called off.
    pub cancelled: usize,
    /// Decisions across all meetings.
    pub decisions: usize,
    /// Action items across all meetings.
    pub action_items: usize,
    /// Action items not started.
    pub actions_pending: usize,
    /// Action items being worked on.
    pub actions_in_progress: usize,
    /// Action items done.
    pub actions_completed: usize,
}
