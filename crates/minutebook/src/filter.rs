//! Read-only search over the meeting collection.

use crate::meeting::{Meeting, MeetingStatus, MeetingType};

/// Criteria for narrowing the meeting list. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    /// Case-insensitive text searched in title, organizer, location and objective.
    pub query: Option<String>,
    /// Exact meeting type.
    pub meeting_type: Option<MeetingType>,
    /// Exact meeting status.
    pub status: Option<MeetingStatus>,
}

impl MeetingFilter {
    /// Whether the filter would let every meeting through.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && self.meeting_type.is_none()
            && self.status.is_none()
    }

    /// Check a single meeting against the filter.
    #[must_use]
    pub fn matches(&self, meeting: &Meeting) -> bool {
        if self.meeting_type.is_some_and(|t| t != meeting.meeting_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != meeting.status) {
            return false;
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                [
                    &meeting.title,
                    &meeting.organizer,
                    &meeting.location,
                    &meeting.objective,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    /// Apply the filter, keeping collection order.
    #[must_use]
    pub fn apply<'a>(&self, meetings: &'a [Meeting]) -> Vec<&'a Meeting> {
        meetings.iter().filter(|m| self.matches(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingDraft;

    fn meeting(title: &str, meeting_type: MeetingType, status: MeetingStatus) -> Meeting {
        Meeting::from_draft(MeetingDraft {
            title: Some(title.to_string()),
            meeting_type: Some(meeting_type),
            status: Some(status),
            organizer: Some("Ing. Carlos Méndez".to_string()),
            ..MeetingDraft::default()
        })
    }

    fn sample() -> Vec<Meeting> {
        vec![
            meeting("Coordinación MEP", MeetingType::Coordination, MeetingStatus::Scheduled),
            meeting("Charla de seguridad", MeetingType::Safety, MeetingStatus::Completed),
            meeting("Avance semanal", MeetingType::Progress, MeetingStatus::Completed),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let meetings = sample();
        let filter = MeetingFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&meetings).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let meetings = sample();
        let filter = MeetingFilter {
            query: Some("mep".to_string()),
            ..MeetingFilter::default()
        };
        let found = filter.apply(&meetings);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Coordinación MEP");
    }

    #[test]
    fn test_query_searches_organizer() {
        let meetings = sample();
        let filter = MeetingFilter {
            query: Some("méndez".to_string()),
            ..MeetingFilter::default()
        };
        assert_eq!(filter.apply(&meetings).len(), 3);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let filter = MeetingFilter {
            query: Some("   ".to_string()),
            ..MeetingFilter::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_criteria_are_combined() {
        let meetings = sample();
        let filter = MeetingFilter {
            query: Some("semanal".to_string()),
            meeting_type: Some(MeetingType::Progress),
            status: Some(MeetingStatus::Completed),
        };
        assert_eq!(filter.apply(&meetings).len(), 1);

        let filter = MeetingFilter {
            meeting_type: Some(MeetingType::Safety),
            status: Some(MeetingStatus::Scheduled),
            ..MeetingFilter::default()
        };
        assert!(filter.apply(&meetings).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let meetings = sample();
        let filter = MeetingFilter {
            status: Some(MeetingStatus::Completed),
            ..MeetingFilter::default()
        };
        let titles: Vec<_> = filter.apply(&meetings).iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Charla de seguridad", "Avance semanal"]);
    }
}
