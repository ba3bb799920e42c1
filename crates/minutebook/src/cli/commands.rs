//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::filter::MeetingFilter;
use crate::meeting::{ActionStatus, MeetingDraft, MeetingPatch, MeetingStatus, MeetingType, Priority};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Text to look for in title, organizer, location and objective
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only meetings of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub meeting_type: Option<MeetingTypeArg>,

    /// Only meetings with this status
    #[arg(long, value_enum)]
    pub status: Option<MeetingStatusArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl ListCommand {
    /// Turn the flags into a collection filter.
    #[must_use]
    pub fn filter(&self) -> MeetingFilter {
        MeetingFilter {
            query: self.search.clone(),
            meeting_type: self.meeting_type.map(Into::into),
            status: self.status.map(Into::into),
        }
    }
}

/// Arguments for commands addressing one meeting.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Meeting id
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Meeting fields shared by `create` and `update`.
#[derive(Debug, Default, Args)]
pub struct MeetingFields {
    /// Meeting title
    #[arg(long)]
    pub title: Option<String>,

    /// Meeting date (free text, e.g. 2024-03-18)
    #[arg(long)]
    pub date: Option<String>,

    /// Meeting time (free text, e.g. 09:00)
    #[arg(long)]
    pub time: Option<String>,

    /// Meeting type
    #[arg(short = 't', long = "type", value_enum)]
    pub meeting_type: Option<MeetingTypeArg>,

    /// Meeting status
    #[arg(long, value_enum)]
    pub status: Option<MeetingStatusArg>,

    /// Who organizes the meeting
    #[arg(long)]
    pub organizer: Option<String>,

    /// Where the meeting takes place
    #[arg(long)]
    pub location: Option<String>,

    /// Purpose of the meeting
    #[arg(long)]
    pub objective: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Attendee name (repeat for several; replaces the whole list on update)
    #[arg(short, long = "attendee", value_name = "NAME")]
    pub attendees: Vec<String>,

    /// Remove every attendee
    #[arg(long, conflicts_with = "attendees")]
    pub clear_attendees: bool,
}

impl MeetingFields {
    fn attendees(&self) -> Option<Vec<String>> {
        if self.clear_attendees {
            Some(Vec::new())
        } else if self.attendees.is_empty() {
            None
        } else {
            Some(self.attendees.clone())
        }
    }

    /// Fields as a creation draft.
    #[must_use]
    pub fn to_draft(&self) -> MeetingDraft {
        MeetingDraft {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            meeting_type: self.meeting_type.map(Into::into),
            status: self.status.map(Into::into),
            organizer: self.organizer.clone(),
            location: self.location.clone(),
            objective: self.objective.clone(),
            attendees: self.attendees(),
            decisions: None,
            action_items: None,
            notes: self.notes.clone(),
        }
    }

    /// Fields as an update patch.
    #[must_use]
    pub fn to_patch(&self) -> MeetingPatch {
        MeetingPatch {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            meeting_type: self.meeting_type.map(Into::into),
            status: self.status.map(Into::into),
            organizer: self.organizer.clone(),
            location: self.location.clone(),
            objective: self.objective.clone(),
            attendees: self.attendees(),
            decisions: None,
            action_items: None,
            notes: self.notes.clone(),
        }
    }
}

/// Create command arguments.
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Meeting fields
    #[command(flatten)]
    pub fields: MeetingFields,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Meeting id
    pub id: String,

    /// Fields to change
    #[command(flatten)]
    pub fields: MeetingFields,
}

/// Decision management commands.
#[derive(Debug, Subcommand)]
pub enum DecisionCommand {
    /// Add a decision to a meeting
    Add {
        /// Meeting id
        meeting_id: String,

        /// What was decided
        #[arg(short, long)]
        description: String,

        /// Who is responsible
        #[arg(short, long, default_value = "")]
        responsible: String,

        /// Decision priority
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: PriorityArg,
    },

    /// Remove a decision from a meeting
    Remove {
        /// Meeting id
        meeting_id: String,

        /// Decision id
        decision_id: String,
    },
}

/// Action item management commands.
#[derive(Debug, Subcommand)]
pub enum ActionCommand {
    /// Add an action item to a meeting
    Add {
        /// Meeting id
        meeting_id: String,

        /// What has to be done
        #[arg(short, long)]
        description: String,

        /// Who is responsible
        #[arg(short, long, default_value = "")]
        responsible: String,

        /// Due date (free text)
        #[arg(long, default_value = "")]
        due: String,

        /// Action priority
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: PriorityArg,

        /// Initial status
        #[arg(short, long, value_enum, default_value = "pending")]
        status: ActionStatusArg,
    },

    /// Change the status of an action item
    Status {
        /// Meeting id
        meeting_id: String,

        /// Action item id
        action_id: String,

        /// New status
        #[arg(value_enum)]
        status: ActionStatusArg,
    },

    /// Remove an action item from a meeting
    Remove {
        /// Meeting id
        meeting_id: String,

        /// Action item id
        action_id: String,
    },
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Meeting id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Meeting id
    pub id: String,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Meeting id
    pub id: String,

    /// Directory to write the minutes into (defaults to the configured export dir)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Meeting type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeetingTypeArg {
    /// Trade coordination
    Coordination,
    /// Technical review
    Technical,
    /// Progress review
    Progress,
    /// Site safety
    Safety,
}

impl From<MeetingTypeArg> for MeetingType {
    fn from(arg: MeetingTypeArg) -> Self {
        match arg {
            MeetingTypeArg::Coordination => Self::Coordination,
            MeetingTypeArg::Technical => Self::Technical,
            MeetingTypeArg::Progress => Self::Progress,
            MeetingTypeArg::Safety => Self::Safety,
        }
    }
}

/// Meeting status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeetingStatusArg {
    /// Not yet held
    Scheduled,
    /// Held
    Completed,
    /// Called off
    Cancelled,
}

impl From<MeetingStatusArg> for MeetingStatus {
    fn from(arg: MeetingStatusArg) -> Self {
        match arg {
            MeetingStatusArg::Scheduled => Self::Scheduled,
            MeetingStatusArg::Completed => Self::Completed,
            MeetingStatusArg::Cancelled => Self::Cancelled,
        }
    }
}

/// Priority argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    /// High priority
    High,
    /// Medium priority
    Medium,
    /// Low priority
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Self::High,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::Low => Self::Low,
        }
    }
}

/// Action item status argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionStatusArg {
    /// Not started
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl From<ActionStatusArg> for ActionStatus {
    fn from(arg: ActionStatusArg) -> Self {
        match arg {
            ActionStatusArg::Pending => Self::Pending,
            ActionStatusArg::InProgress => Self::InProgress,
            ActionStatusArg::Completed => Self::Completed,
        }
    }
}
