//! The canonical meeting written to an empty store on first run.

use chrono::{TimeZone, Utc};

use crate::meeting::{
    ActionItem, ActionStatus, Decision, Meeting, MeetingStatus, MeetingType, Priority,
};

/// Id of the seeded meeting.
pub const SEED_MEETING_ID: &str = "seed-0001";

/// The fixed initial dataset: one completed coordination meeting.
///
/// Every field, including the timestamps, is constant so that seeding is
/// reproducible.
#[must_use]
pub fn seed_meetings() -> Vec<Meeting> {
    let stamp = Utc
        .with_ymd_and_hms(2024, 3, 18, 11, 30, 0)
        .single()
        .unwrap_or_default();

    vec![Meeting {
        id: SEED_MEETING_ID.to_string(),
        title: "Reunión de Coordinación MEP - Semana 12".to_string(),
        date: "2024-03-18".to_string(),
        time: "09:00".to_string(),
        meeting_type: MeetingType::Coordination,
        status: MeetingStatus::Completed,
        organizer: "Ing. Carlos Méndez".to_string(),
        location: "Sala de Juntas - Oficina de Obra".to_string(),
        objective: "Coordinar instalaciones mecánicas, eléctricas y sanitarias del nivel 3"
            .to_string(),
        attendees: vec![
            "Ing. Carlos Méndez".to_string(),
            "Arq. Laura Torres".to_string(),
            "Ing. Roberto Silva".to_string(),
            "Téc. Ana Gómez".to_string(),
        ],
        decisions: vec![
            Decision {
                id: "seed-decision-1".to_string(),
                description: "Reubicar ducto de HVAC para evitar interferencia con viga V-12"
                    .to_string(),
                responsible: "Ing. Roberto Silva".to_string(),
                priority: Priority::High,
            },
            Decision {
                id: "seed-decision-2".to_string(),
                description: "Aprobar ruta alterna de tubería sanitaria en eje C".to_string(),
                responsible: "Arq. Laura Torres".to_string(),
                priority: Priority::Medium,
            },
        ],
        action_items: vec![
            ActionItem {
                id: "seed-action-1".to_string(),
                description: "Actualizar planos de coordinación MEP nivel 3".to_string(),
                responsible: "Téc. Ana Gómez".to_string(),
                due_date: "2024-03-22".to_string(),
                priority: Priority::High,
                status: ActionStatus::InProgress,
            },
            ActionItem {
                id: "seed-action-2".to_string(),
                description: "Enviar RFI al estructurista sobre perforaciones en viga V-12"
                    .to_string(),
                responsible: "Ing. Roberto Silva".to_string(),
                due_date: "2024-03-20".to_string(),
                priority: Priority::Medium,
                status: ActionStatus::Pending,
            },
        ],
        notes: "Próxima reunión de coordinación el lunes 25 de marzo.".to_string(),
        created_at: stamp,
        updated_at: stamp,
    }]
}
