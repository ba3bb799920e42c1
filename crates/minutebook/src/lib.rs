//! `minutebook` - a local record manager for construction meeting minutes
//!
//! Meetings, with their decisions and action items, live in one in-memory
//! collection owned by [`RecordManager`]. Every change is mirrored to a
//! key/value [`Storage`] as a single JSON document, and any meeting can be
//! rendered into plain-text minutes with [`document`].
//!
//! ```no_run
//! use minutebook::{MeetingDraft, RecordManager, RecordStore, Storage};
//!
//! let storage = Storage::open("minutes.db")?;
//! let mut manager = RecordManager::open(RecordStore::new(storage, "meetingMinutes"));
//! let id = manager.create(MeetingDraft::titled("Coordinación MEP Semanal")).id.clone();
//! let report = minutebook::document::render(manager.get(&id).expect("just created"));
//! # Ok::<(), minutebook::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod logging;
pub mod manager;
pub mod meeting;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use filter::MeetingFilter;
pub use logging::init_logging;
pub use manager::{RecordManager, Summary};
pub use meeting::{
    ActionItem, ActionStatus, Decision, Meeting, MeetingDraft, MeetingPatch, MeetingStatus,
    MeetingType, Priority, RecordId,
};
pub use storage::{KeyValueStore, Storage, StorageStats};
pub use store::RecordStore;
