//! Meeting minutes domain model.
//!
//! A [`Meeting`] owns its [`Decision`]s and [`ActionItem`]s; they have no
//! life outside the parent record. Values are built from a [`MeetingDraft`]
//! and changed through a [`MeetingPatch`].
//!
//! Nothing is rejected here: an empty title or date is a valid meeting.
//! Records typed in a hurry on site are kept rather than refused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a meeting, decision or action item.
pub type RecordId = String;

/// Generate a new record id: creation time in milliseconds plus a random suffix.
#[must_use]
pub fn generate_id() -> RecordId {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &random[..12])
}

/// Kind of meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingType {
    /// Trade coordination.
    #[default]
    Coordination,
    /// Technical review.
    Technical,
    /// Progress review.
    Progress,
    /// Site safety.
    Safety,
}

impl MeetingType {
    /// Human-readable label used in generated minutes.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Coordination => "Coordinación",
            Self::Technical => "Técnica",
            Self::Progress => "Avance",
            Self::Safety => "Seguridad",
        }
    }
}

impl std::fmt::Display for MeetingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coordination => write!(f, "coordination"),
            Self::Technical => write!(f, "technical"),
            Self::Progress => write!(f, "progress"),
            Self::Safety => write!(f, "safety"),
        }
    }
}

/// Where a meeting stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    /// Planned, not yet held.
    #[default]
    Scheduled,
    /// Held and minuted.
    Completed,
    /// Called off.
    Cancelled,
}

impl MeetingStatus {
    /// Human-readable label used in generated minutes.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Programada",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl std::fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Priority shared by decisions and action items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Normal.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Human-readable label used in generated minutes.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Progress of an action item.
///
/// Any status may follow any other; there is no enforced workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

impl ActionStatus {
    /// Human-readable label used in generated minutes.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En progreso",
            Self::Completed => "Completada",
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// An agreed outcome recorded in a meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Decision {
    /// Unique within the parent meeting.
    #[serde(default = "generate_id")]
    pub id: RecordId,
    /// What was decided.
    pub description: String,
    /// Who owns the decision.
    pub responsible: String,
    /// How urgent it is.
    pub priority: Priority,
}

impl Decision {
    /// Create a decision with a freshly generated id.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        responsible: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: generate_id(),
            description: description.into(),
            responsible: responsible.into(),
            priority,
        }
    }
}

/// A follow-up task arising from a meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionItem {
    /// Unique within the parent meeting.
    #[serde(default = "generate_id")]
    pub id: RecordId,
    /// What has to be done.
    pub description: String,
    /// Who has to do it.
    pub responsible: String,
    /// Free-text due date.
    pub due_date: String,
    /// How urgent it is.
    pub priority: Priority,
    /// Current progress.
    pub status: ActionStatus,
}

impl ActionItem {
    /// Create a pending action item with a freshly generated id.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        responsible: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: generate_id(),
            description: description.into(),
            responsible: responsible.into(),
            due_date: due_date.into(),
            priority,
            status: ActionStatus::Pending,
        }
    }

    /// Builder-style status override.
    #[must_use]
    pub fn with_status(mut self, status: ActionStatus) -> Self {
        self.status = status;
        self
    }
}

/// A single meeting record with its nested decisions and action items.
///
/// Fields missing from stored JSON take their defaults, so one incomplete
/// record does not make the whole collection unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meeting {
    /// Generated at creation, never changed afterwards.
    #[serde(default = "generate_id")]
    pub id: RecordId,
    /// Meeting title.
    pub title: String,
    /// Free-text date.
    pub date: String,
    /// Free-text time of day.
    pub time: String,
    /// Serialized as `type` to match the stored layout.
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    /// Current status.
    pub status: MeetingStatus,
    /// Who called the meeting.
    pub organizer: String,
    /// Where it takes place.
    pub location: String,
    /// Why it is held.
    pub objective: String,
    /// Attendee names, in the order given.
    pub attendees: Vec<String>,
    /// Decisions, in the order given.
    pub decisions: Vec<Decision>,
    /// Action items, in the order given.
    pub action_items: Vec<ActionItem>,
    /// Free-text notes.
    pub notes: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update; never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Partial input for creating a meeting. Unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    /// Meeting title.
    pub title: Option<String>,
    /// Free-text date.
    pub date: Option<String>,
    /// Free-text time.
    pub time: Option<String>,
    /// Defaults to [`MeetingType::Coordination`].
    pub meeting_type: Option<MeetingType>,
    /// Defaults to [`MeetingStatus::Scheduled`].
    pub status: Option<MeetingStatus>,
    /// Organizer name.
    pub organizer: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Objective.
    pub objective: Option<String>,
    /// Attendee names.
    pub attendees: Option<Vec<String>>,
    /// Initial decisions.
    pub decisions: Option<Vec<Decision>>,
    /// Initial action items.
    pub action_items: Option<Vec<ActionItem>>,
    /// Notes.
    pub notes: Option<String>,
}

impl MeetingDraft {
    /// Start a draft with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Partial change to an existing meeting.
///
/// Set fields overwrite the meeting's; list fields replace the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingPatch {
    /// New title.
    pub title: Option<String>,
    /// New date.
    pub date: Option<String>,
    /// New time.
    pub time: Option<String>,
    /// New type.
    pub meeting_type: Option<MeetingType>,
    /// New status.
    pub status: Option<MeetingStatus>,
    /// New organizer.
    pub organizer: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New objective.
    pub objective: Option<String>,
    /// Replacement attendee list.
    pub attendees: Option<Vec<String>>,
    /// Replacement decision list.
    pub decisions: Option<Vec<Decision>>,
    /// Replacement action item list.
    pub action_items: Option<Vec<ActionItem>>,
    /// New notes.
    pub notes: Option<String>,
}

impl MeetingPatch {
    /// Whether the patch sets no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Meeting {
    /// Build a complete meeting from a draft, stamped with the current time.
    #[must_use]
    pub fn from_draft(draft: MeetingDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Build a complete meeting from a draft with an explicit creation time.
    #[must_use]
    pub fn from_draft_at(draft: MeetingDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(),
            title: draft.title.unwrap_or_default(),
            date: draft.date.unwrap_or_default(),
            time: draft.time.unwrap_or_default(),
            meeting_type: draft.meeting_type.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            organizer: draft.organizer.unwrap_or_default(),
            location: draft.location.unwrap_or_default(),
            objective: draft.objective.unwrap_or_default(),
            attendees: draft.attendees.unwrap_or_default(),
            decisions: draft.decisions.unwrap_or_default(),
            action_items: draft.action_items.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this meeting and refresh `updated_at`.
    pub fn apply_update(&mut self, patch: MeetingPatch) {
        self.apply_update_at(patch, Utc::now());
    }

    /// Merge a patch with an explicit modification time.
    ///
    /// `updated_at` never moves backwards, even if `now` is earlier than the
    /// previous stamp (clock adjustments).
    pub fn apply_update_at(&mut self, patch: MeetingPatch, now: DateTime<Utc>) {
        let MeetingPatch {
            title,
            date,
            time,
            meeting_type,
            status,
            organizer,
            location,
            objective,
            attendees,
            decisions,
            action_items,
            notes,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(time) = time {
            self.time = time;
        }
        if let Some(meeting_type) = meeting_type {
            self.meeting_type = meeting_type;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(organizer) = organizer {
            self.organizer = organizer;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(objective) = objective {
            self.objective = objective;
        }
        if let Some(attendees) = attendees {
            self.attendees = attendees;
        }
        if let Some(decisions) = decisions {
            self.decisions = decisions;
        }
        if let Some(action_items) = action_items {
            self.action_items = action_items;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }

        self.updated_at = now.max(self.updated_at);
    }

    /// Find a decision by id.
    #[must_use]
    pub fn decision(&self, id: &str) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id == id)
    }

    /// Find an action item by id.
    #[must_use]
    pub fn action_item(&self, id: &str) -> Option<&ActionItem> {
        self.action_items.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_from_draft_defaults() {
        let meeting = Meeting::from_draft(MeetingDraft::default());

        assert!(!meeting.id.is_empty());
        assert_eq!(meeting.title, "");
        assert_eq!(meeting.date, "");
        assert_eq!(meeting.meeting_type, MeetingType::Coordination);
        assert_eq!(meeting.status, MeetingStatus::Scheduled);
        assert!(meeting.attendees.is_empty());
        assert!(meeting.decisions.is_empty());
        assert!(meeting.action_items.is_empty());
        assert_eq!(meeting.created_at, meeting.updated_at);
    }

    #[test]
    fn test_from_draft_keeps_given_fields() {
        let draft = MeetingDraft {
            title: Some("Revisión estructural".to_string()),
            meeting_type: Some(MeetingType::Technical),
            status: Some(MeetingStatus::Completed),
            attendees: Some(vec!["Ana".to_string(), "Luis".to_string()]),
            ..MeetingDraft::default()
        };
        let meeting = Meeting::from_draft_at(draft, fixed_time());

        assert_eq!(meeting.title, "Revisión estructural");
        assert_eq!(meeting.meeting_type, MeetingType::Technical);
        assert_eq!(meeting.status, MeetingStatus::Completed);
        assert_eq!(meeting.attendees, vec!["Ana", "Luis"]);
        assert_eq!(meeting.created_at, fixed_time());
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Meeting::from_draft(MeetingDraft::default());
        let b = Meeting::from_draft(MeetingDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_merges_and_refreshes() {
        let mut meeting = Meeting::from_draft_at(MeetingDraft::titled("Original"), fixed_time());
        let id = meeting.id.clone();
        let later = fixed_time() + Duration::minutes(30);

        meeting.apply_update_at(
            MeetingPatch {
                location: Some("Caseta de obra".to_string()),
                ..MeetingPatch::default()
            },
            later,
        );

        assert_eq!(meeting.id, id);
        assert_eq!(meeting.title, "Original");
        assert_eq!(meeting.location, "Caseta de obra");
        assert_eq!(meeting.created_at, fixed_time());
        assert_eq!(meeting.updated_at, later);
    }

    #[test]
    fn test_apply_update_replaces_lists_wholesale() {
        let draft = MeetingDraft {
            attendees: Some(vec!["Ana".to_string(), "Luis".to_string()]),
            decisions: Some(vec![Decision::new("Usar concreto f'c 250", "Ana", Priority::High)]),
            ..MeetingDraft::default()
        };
        let mut meeting = Meeting::from_draft(draft);

        meeting.apply_update(MeetingPatch {
            attendees: Some(vec!["Marta".to_string()]),
            decisions: Some(Vec::new()),
            ..MeetingPatch::default()
        });

        assert_eq!(meeting.attendees, vec!["Marta"]);
        assert!(meeting.decisions.is_empty());
    }

    #[test]
    fn test_updated_at_never_moves_backwards() {
        let mut meeting = Meeting::from_draft_at(MeetingDraft::default(), fixed_time());
        let earlier = fixed_time() - Duration::hours(2);

        meeting.apply_update_at(MeetingPatch::default(), earlier);

        assert_eq!(meeting.updated_at, fixed_time());
        assert!(meeting.updated_at >= meeting.created_at);
    }

    #[test]
    fn test_empty_title_is_accepted() {
        let mut meeting = Meeting::from_draft(MeetingDraft::titled("Algo"));
        meeting.apply_update(MeetingPatch {
            title: Some(String::new()),
            date: Some(String::new()),
            ..MeetingPatch::default()
        });
        assert_eq!(meeting.title, "");
        assert_eq!(meeting.date, "");
    }

    #[test]
    fn test_action_status_is_free_form() {
        let mut item = ActionItem::new("Enviar planos", "Luis", "2024-03-22", Priority::Low)
            .with_status(ActionStatus::Completed);
        item.status = ActionStatus::Pending;
        item.status = ActionStatus::InProgress;
        assert_eq!(item.status, ActionStatus::InProgress);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(MeetingPatch::default().is_empty());
        let patch = MeetingPatch {
            notes: Some("x".to_string()),
            ..MeetingPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_lookup_nested() {
        let decision = Decision::new("d", "r", Priority::Low);
        let action = ActionItem::new("a", "r", "", Priority::Low);
        let meeting = Meeting::from_draft(MeetingDraft {
            decisions: Some(vec![decision.clone()]),
            action_items: Some(vec![action.clone()]),
            ..MeetingDraft::default()
        });

        assert_eq!(meeting.decision(&decision.id), Some(&decision));
        assert_eq!(meeting.action_item(&action.id), Some(&action));
        assert!(meeting.decision("missing").is_none());
    }

    #[test]
    fn test_enum_display_matches_serialized_form() {
        assert_eq!(ActionStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            serde_json::to_string(&ActionStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(MeetingType::Safety.to_string(), "safety");
        assert_eq!(serde_json::to_string(&MeetingType::Safety).unwrap(), "\"safety\"");
        assert_eq!(MeetingStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let meeting: Meeting = serde_json::from_str(
            r#"{"id": "m-1", "title": "Revisión", "decisions": [{"description": "Cambiar tubería"}], "actionItems": [{"id": "a-1"}]}"#,
        )
        .unwrap();

        assert_eq!(meeting.id, "m-1");
        assert_eq!(meeting.title, "Revisión");
        assert_eq!(meeting.notes, "");
        assert_eq!(meeting.meeting_type, MeetingType::Coordination);
        assert_eq!(meeting.status, MeetingStatus::Scheduled);
        assert!(meeting.attendees.is_empty());
        assert!(!meeting.decisions[0].id.is_empty());
        assert_eq!(meeting.decisions[0].priority, Priority::Medium);
        assert_eq!(meeting.action_items[0].status, ActionStatus::Pending);
        assert!(meeting.updated_at >= meeting.created_at);
    }

    #[test]
    fn test_serialized_field_names() {
        let meeting = Meeting::from_draft(MeetingDraft {
            action_items: Some(vec![ActionItem::new("a", "b", "2024-04-01", Priority::High)]),
            ..MeetingDraft::default()
        });
        let json = serde_json::to_value(&meeting).unwrap();

        assert!(json.get("type").is_some());
        assert!(json.get("actionItems").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["actionItems"][0]["dueDate"], "2024-04-01");
        assert_eq!(json["actionItems"][0]["status"], "pending");
    }
}
