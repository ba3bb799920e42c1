//! `minutes` - CLI for minutebook
//!
//! Every mutating command goes through the record manager, which persists the
//! full collection after each change.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use minutebook::cli::{
    prompt, ActionCommand, Cli, Command, ConfigCommand, DecisionCommand, DeleteCommand,
    ExportCommand, ListCommand, ShowCommand,
};
use minutebook::{
    document, init_logging, ActionItem, Config, Decision, Error, Meeting, MeetingPatch,
    RecordManager, RecordStore, Storage,
};

type Manager = RecordManager<Storage>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    if !cli.command.needs_config() {
        if let Command::Config(config_cmd) = cli.command {
            inspect_config(cli.config, config_cmd);
        }
        return Ok(());
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    if let Command::Config(ConfigCommand::Show { json }) = cli.command {
        return show_config(&config, json);
    }

    let database_path = config.database_path();
    let storage = Storage::open(&database_path)
        .with_context(|| format!("opening database {}", database_path.display()))?;
    let mut manager =
        RecordManager::open(RecordStore::new(storage, config.storage.storage_key.clone()));

    match cli.command {
        Command::List(cmd) => handle_list(&manager, &cmd),
        Command::Show(cmd) => handle_show(&manager, &cmd),
        Command::Create(cmd) => {
            let meeting = manager.create(cmd.fields.to_draft());
            println!("Created meeting {}", meeting.id);
            Ok(())
        }
        Command::Update(cmd) => {
            let patch = cmd.fields.to_patch();
            report_update(&cmd.id, manager.update(&cmd.id, patch));
            Ok(())
        }
        Command::Decision(cmd) => handle_decision(&mut manager, cmd),
        Command::Action(cmd) => handle_action(&mut manager, cmd),
        Command::Delete(cmd) => handle_delete(&mut manager, &cmd),
        Command::Render(cmd) => {
            print!("{}", document::render(find(&manager, &cmd.id)?));
            Ok(())
        }
        Command::Export(cmd) => handle_export(&manager, &config, &cmd),
        Command::Status(cmd) => handle_status(&manager, &config, cmd.json),
        Command::Config(_) => Ok(()),
    }
}

fn find<'a>(manager: &'a Manager, id: &str) -> Result<&'a Meeting, Error> {
    manager.get(id).ok_or_else(|| Error::meeting_not_found(id))
}

fn report_update(id: &str, updated: Option<&Meeting>) {
    match updated {
        Some(meeting) => println!("Updated meeting {}", meeting.id),
        None => println!("No meeting {id}; nothing changed."),
    }
}

fn handle_list(manager: &Manager, cmd: &ListCommand) -> anyhow::Result<()> {
    let meetings = manager.search(&cmd.filter());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&meetings)?);
        return Ok(());
    }

    if meetings.is_empty() {
        println!("No meetings.");
        return Ok(());
    }

    for meeting in meetings {
        println!(
            "{:<28} {:<10} {:<5} {:<12} {:<9} {}",
            meeting.id,
            meeting.date,
            meeting.time,
            meeting.meeting_type.to_string(),
            meeting.status.to_string(),
            meeting.title
        );
    }
    Ok(())
}

fn handle_show(manager: &Manager, cmd: &ShowCommand) -> anyhow::Result<()> {
    let meeting = find(manager, &cmd.id)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(meeting)?);
        return Ok(());
    }

    println!("{}", meeting.title);
    println!("  Id:         {}", meeting.id);
    println!("  When:       {} {}", meeting.date, meeting.time);
    println!("  Type:       {}", meeting.meeting_type);
    println!("  Status:     {}", meeting.status);
    println!("  Organizer:  {}", meeting.organizer);
    println!("  Location:   {}", meeting.location);
    println!("  Objective:  {}", meeting.objective);
    println!("  Attendees:  {}", meeting.attendees.join(", "));
    println!();
    println!("Decisions:");
    for decision in &meeting.decisions {
        println!(
            "  [{}] {} ({}, {})",
            decision.id, decision.description, decision.responsible, decision.priority
        );
    }
    println!("Action items:");
    for item in &meeting.action_items {
        println!(
            "  [{}] {} ({}, due {}, {}, {})",
            item.id, item.description, item.responsible, item.due_date, item.priority, item.status
        );
    }
    if !meeting.notes.is_empty() {
        println!();
        println!("Notes: {}", meeting.notes);
    }
    Ok(())
}

fn handle_decision(manager: &mut Manager, cmd: DecisionCommand) -> anyhow::Result<()> {
    match cmd {
        DecisionCommand::Add {
            meeting_id,
            description,
            responsible,
            priority,
        } => {
            let mut decisions = find(manager, &meeting_id)?.decisions.clone();
            let decision = Decision::new(description, responsible, priority.into());
            let decision_id = decision.id.clone();
            decisions.push(decision);

            manager.update(
                &meeting_id,
                MeetingPatch {
                    decisions: Some(decisions),
                    ..MeetingPatch::default()
                },
            );
            println!("Added decision {decision_id} to meeting {meeting_id}");
        }
        DecisionCommand::Remove {
            meeting_id,
            decision_id,
        } => {
            let mut decisions = find(manager, &meeting_id)?.decisions.clone();
            let before = decisions.len();
            decisions.retain(|d| d.id != decision_id);
            if decisions.len() == before {
                println!("No decision {decision_id} in meeting {meeting_id}; nothing changed.");
                return Ok(());
            }

            manager.update(
                &meeting_id,
                MeetingPatch {
                    decisions: Some(decisions),
                    ..MeetingPatch::default()
                },
            );
            println!("Removed decision {decision_id} from meeting {meeting_id}");
        }
    }
    Ok(())
}

fn handle_action(manager: &mut Manager, cmd: ActionCommand) -> anyhow::Result<()> {
    match cmd {
        ActionCommand::Add {
            meeting_id,
            description,
            responsible,
            due,
            priority,
            status,
        } => {
            let mut items = find(manager, &meeting_id)?.action_items.clone();
            let item = ActionItem::new(description, responsible, due, priority.into())
                .with_status(status.into());
            let action_id = item.id.clone();
            items.push(item);

            manager.update(&meeting_id, action_items_patch(items));
            println!("Added action item {action_id} to meeting {meeting_id}");
        }
        ActionCommand::Status {
            meeting_id,
            action_id,
            status,
        } => {
            let mut items = find(manager, &meeting_id)?.action_items.clone();
            let Some(item) = items.iter_mut().find(|a| a.id == action_id) else {
                println!("No action item {action_id} in meeting {meeting_id}; nothing changed.");
                return Ok(());
            };
            item.status = status.into();
            let new_status = item.status;

            manager.update(&meeting_id, action_items_patch(items));
            println!("Action item {action_id} is now {new_status}");
        }
        ActionCommand::Remove {
            meeting_id,
            action_id,
        } => {
            let mut items = find(manager, &meeting_id)?.action_items.clone();
            let before = items.len();
            items.retain(|a| a.id != action_id);
            if items.len() == before {
                println!("No action item {action_id} in meeting {meeting_id}; nothing changed.");
                return Ok(());
            }

            manager.update(&meeting_id, action_items_patch(items));
            println!("Removed action item {action_id} from meeting {meeting_id}");
        }
    }
    Ok(())
}

fn action_items_patch(items: Vec<ActionItem>) -> MeetingPatch {
    MeetingPatch {
        action_items: Some(items),
        ..MeetingPatch::default()
    }
}

fn handle_delete(manager: &mut Manager, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let Some(meeting) = manager.get(&cmd.id) else {
        println!("No meeting {}; nothing deleted.", cmd.id);
        return Ok(());
    };

    if !cmd.yes {
        let question = format!(
            "Permanently delete meeting \"{}\" ({})?",
            meeting.title, meeting.id
        );
        let confirmed = prompt::confirm(&question, &mut io::stdin().lock(), &mut io::stdout())?;
        if !confirmed {
            println!("Aborted; nothing deleted.");
            return Ok(());
        }
    }

    if manager.delete(&cmd.id) {
        println!("Deleted meeting {}", cmd.id);
    }
    Ok(())
}

fn handle_export(manager: &Manager, config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let meeting = find(manager, &cmd.id)?;
    let dir = cmd.output.clone().unwrap_or_else(|| config.output_dir());

    let path = document::download(meeting, &dir)
        .with_context(|| format!("writing minutes into {}", dir.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn handle_status(manager: &Manager, config: &Config, json: bool) -> anyhow::Result<()> {
    let stats = manager.store().backend().stats()?;
    let summary = manager.summary();

    if json {
        let status = serde_json::json!({
            "database_path": config.database_path(),
            "storage_key": manager.store().key(),
            "entries": stats.entries,
            "db_size_bytes": stats.db_size_bytes,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("minutes status");
        println!("--------------");
        println!("Database:      {}", config.database_path().display());
        println!("Storage key:   {}", manager.store().key());
        println!("Size:          {} bytes", stats.db_size_bytes);
        println!();
        println!(
            "Meetings:      {} ({} scheduled, {} completed, {} cancelled)",
            summary.meetings, summary.scheduled, summary.completed, summary.cancelled
        );
        println!("Decisions:     {}", summary.decisions);
        println!(
            "Action items:  {} ({} pending, {} in progress, {} completed)",
            summary.action_items,
            summary.actions_pending,
            summary.actions_in_progress,
            summary.actions_completed
        );
    }
    Ok(())
}

fn inspect_config(active: Option<PathBuf>, cmd: ConfigCommand) {
    match cmd {
        ConfigCommand::Path => {
            let path = active.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.or(active).unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
        ConfigCommand::Show { .. } => {}
    }
}

fn show_config(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================");
    println!();
    println!("[Storage]");
    println!("  Database path:  {}", config.database_path().display());
    println!("  Storage key:    {}", config.storage.storage_key);
    println!();
    println!("[Export]");
    println!("  Output dir:     {}", config.output_dir().display());
    Ok(())
}
