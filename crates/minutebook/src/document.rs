//! Plain-text minutes generated from a meeting.
//!
//! [`render`] is pure and deterministic: the same meeting always yields the
//! same bytes. [`download`] is the effectful edge that writes the rendered
//! report to disk as `Acta_<title>_<date>.txt`.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::{Error, Result};
use crate::meeting::Meeting;

/// MIME type of generated minutes.
pub const MIME_TYPE: &str = "text/plain";

const HEADER: &str = "ACTA DE REUNIÓN";
const RULE: &str = "========================================";

/// Longest title or date fragment kept in a file name, in characters.
pub const MAX_NAME_PART_CHARS: usize = 100;

static TITLE_UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]").expect("valid title sanitizing regex"));
static DATE_UNSAFE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\-]").expect("valid date sanitizing regex"));

/// A rendered report ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Suggested file name.
    pub file_name: String,
    /// Always [`MIME_TYPE`].
    pub mime_type: &'static str,
    /// Report text.
    pub contents: String,
}

impl Document {
    /// Report bytes (UTF-8).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Write the report into `dir` under its file name, creating `dir` if needed.
    ///
    /// An existing file with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.as_bytes())?;
        info!("Wrote minutes to {}", path.display());
        Ok(path)
    }
}

/// Render a meeting as plain-text minutes.
///
/// Lists appear in the meeting's own order; nothing is sorted or filtered.
#[must_use]
pub fn render(meeting: &Meeting) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        RULE.to_string(),
        String::new(),
        format!("Título: {}", meeting.title),
        format!("Fecha: {}", meeting.date),
        format!("Hora: {}", meeting.time),
        format!("Tipo: {}", meeting.meeting_type.label()),
        format!("Estado: {}", meeting.status.label()),
        format!("Organizador: {}", meeting.organizer),
        format!("Ubicación: {}", meeting.location),
        format!("Objetivo: {}", meeting.objective),
        String::new(),
    ];

    lines.push("ASISTENTES".to_string());
    if meeting.attendees.is_empty() {
        lines.push("(ninguno)".to_string());
    }
    lines.extend(meeting.attendees.iter().map(|a| format!("- {a}")));
    lines.push(String::new());

    lines.push("DECISIONES".to_string());
    if meeting.decisions.is_empty() {
        lines.push("(ninguna)".to_string());
    }
    for (n, decision) in meeting.decisions.iter().enumerate() {
        lines.push(format!("{}. {}", n + 1, decision.description));
        lines.push(format!("   Responsable: {}", decision.responsible));
        lines.push(format!("   Prioridad: {}", decision.priority.label()));
    }
    lines.push(String::new());

    lines.push("ACCIONES".to_string());
    if meeting.action_items.is_empty() {
        lines.push("(ninguna)".to_string());
    }
    for (n, item) in meeting.action_items.iter().enumerate() {
        lines.push(format!("{}. {}", n + 1, item.description));
        lines.push(format!("   Responsable: {}", item.responsible));
        lines.push(format!("   Fecha límite: {}", item.due_date));
        lines.push(format!("   Prioridad: {}", item.priority.label()));
        lines.push(format!("   Estado: {}", item.status.label()));
    }
    lines.push(String::new());

    lines.push("NOTAS".to_string());
    lines.push(meeting.notes.clone());
    lines.push(String::new());

    lines.push(RULE.to_string());
    lines.push(format!("Creada: {}", meeting.created_at.to_rfc3339()));
    lines.push(format!("Actualizada: {}", meeting.updated_at.to_rfc3339()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// File name for a meeting's minutes: `Acta_<title>_<date>.txt`.
///
/// Every character of the title that is not a letter or digit becomes `_`;
/// the date keeps letters, digits and `-`. Each part is cut to
/// [`MAX_NAME_PART_CHARS`] characters so the name stays within file system
/// limits.
#[must_use]
pub fn file_name(meeting: &Meeting) -> String {
    let title = TITLE_UNSAFE_RE.replace_all(&meeting.title, "_");
    let date = DATE_UNSAFE_RE.replace_all(&meeting.date, "_");
    format!(
        "Acta_{}_{}.txt",
        truncate_chars(&title, MAX_NAME_PART_CHARS),
        truncate_chars(&date, MAX_NAME_PART_CHARS)
    )
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Build the downloadable document for a meeting.
#[must_use]
pub fn export(meeting: &Meeting) -> Document {
    Document {
        file_name: file_name(meeting),
        mime_type: MIME_TYPE,
        contents: render(meeting),
    }
}

/// Render `meeting` and write it into `dir`; returns the written path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn download(meeting: &Meeting, dir: &Path) -> Result<PathBuf> {
    export(meeting).write_to(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::{
        ActionItem, ActionStatus, Decision, MeetingDraft, MeetingPatch, MeetingType, Priority,
    };
    use crate::seed::seed_meetings;

    fn scenario_meeting() -> Meeting {
        Meeting::from_draft(MeetingDraft {
            title: Some("Coordinación MEP Semanal".to_string()),
            date: Some("2024-03-25".to_string()),
            meeting_type: Some(MeetingType::Coordination),
            attendees: Some(vec!["Ing. Silva".to_string(), "Arq. Torres".to_string()]),
            decisions: Some(vec![Decision::new(
                "Aprobar ruta de ductos",
                "Ing. Silva",
                Priority::High,
            )]),
            action_items: Some(vec![ActionItem::new(
                "Actualizar planos",
                "Téc. Gómez",
                "2024-03-29",
                Priority::Medium,
            )
            .with_status(ActionStatus::InProgress)]),
            ..MeetingDraft::default()
        })
    }

    #[test]
    fn test_render_is_deterministic() {
        let meeting = seed_meetings().remove(0);
        assert_eq!(render(&meeting), render(&meeting));
    }

    #[test]
    fn test_render_contains_fields() {
        let meeting = seed_meetings().remove(0);
        let report = render(&meeting);

        assert!(report.starts_with("ACTA DE REUNIÓN\n"));
        assert!(report.contains("Título: Reunión de Coordinación MEP - Semana 12"));
        assert!(report.contains("Tipo: Coordinación"));
        assert!(report.contains("Estado: Completada"));
        assert!(report.contains("- Arq. Laura Torres"));
        assert!(report.contains("Fecha límite: 2024-03-22"));
    }

    #[test]
    fn test_render_keeps_collection_order() {
        let meeting = seed_meetings().remove(0);
        let report = render(&meeting);

        let first = report.find(&meeting.action_items[0].description).unwrap();
        let second = report.find(&meeting.action_items[1].description).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_empty_meeting() {
        let report = render(&Meeting::from_draft(MeetingDraft::default()));
        assert!(report.contains("Título: \n"));
        assert!(report.contains("DECISIONES\n(ninguna)"));
        assert!(report.contains("ACCIONES\n(ninguna)"));
    }

    #[test]
    fn test_render_after_status_update() {
        let mut meeting = scenario_meeting();
        let decisions = meeting.decisions.clone();
        let mut items = meeting.action_items.clone();
        items[0].status = ActionStatus::Completed;
        meeting.apply_update(MeetingPatch {
            action_items: Some(items),
            ..MeetingPatch::default()
        });

        let report = render(&meeting);
        assert!(report.contains("1. Actualizar planos"));
        assert!(report.contains("   Estado: Completada"));
        assert!(!report.contains("En progreso"));
        assert!(report.contains("1. Aprobar ruta de ductos\n   Responsable: Ing. Silva\n   Prioridad: Alta"));
        assert_eq!(meeting.decisions, decisions);
    }

    #[test]
    fn test_file_name_sanitizes_title() {
        let meeting = scenario_meeting();
        assert_eq!(
            file_name(&meeting),
            "Acta_Coordinación_MEP_Semanal_2024-03-25.txt"
        );
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        let mut meeting = scenario_meeting();
        meeting.title = "Obra ../Norte: fase 1/2".to_string();
        meeting.date = "25/03/2024".to_string();

        let name = file_name(&meeting);
        assert!(!name.contains('/'));
        assert!(!name.contains(':'));
        assert_eq!(name, "Acta_Obra____Norte__fase_1_2_25_03_2024.txt");
    }

    #[test]
    fn test_file_name_caps_long_title() {
        let mut meeting = scenario_meeting();
        meeting.title = "Ñ".repeat(300);

        let name = file_name(&meeting);
        let title_part = name
            .strip_prefix("Acta_")
            .and_then(|rest| rest.strip_suffix("_2024-03-25.txt"))
            .unwrap();
        assert_eq!(title_part.chars().count(), MAX_NAME_PART_CHARS);
        assert!(name.len() < 255);
    }

    #[test]
    fn test_download_long_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut meeting = scenario_meeting();
        meeting.title = "a".repeat(300);

        let path = download(&meeting, dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("Acta_{}_2024-03-25.txt", "a".repeat(MAX_NAME_PART_CHARS))
        );
    }

    #[test]
    fn test_render_ends_with_newline() {
        let report = render(&scenario_meeting());
        assert!(report.ends_with('\n'));
        assert!(report.contains("NOTAS\n\n\n===="));
    }

    #[test]
    fn test_export_document() {
        let meeting = scenario_meeting();
        let document = export(&meeting);

        assert_eq!(document.mime_type, "text/plain");
        assert_eq!(document.file_name, file_name(&meeting));
        assert_eq!(document.as_bytes(), render(&meeting).as_bytes());
    }

    #[test]
    fn test_download_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let meeting = scenario_meeting();

        let path = download(&meeting, &dir.path().join("actas")).unwrap();
        assert!(path.ends_with("Acta_Coordinación_MEP_Semanal_2024-03-25.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), render(&meeting));
    }
}
