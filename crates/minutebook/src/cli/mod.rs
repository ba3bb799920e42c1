//! Command-line interface for minutebook.
//!
//! This module provides the CLI structure for the `minutes` binary.

mod commands;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ActionCommand, ActionStatusArg, ConfigCommand, CreateCommand, DecisionCommand, DeleteCommand,
    ExportCommand, ListCommand, MeetingFields, MeetingStatusArg, MeetingTypeArg, PriorityArg,
    RenderCommand, ShowCommand, StatusCommand, UpdateCommand,
};

/// minutes - Keep construction meeting minutes
///
/// Records meetings with their decisions and action items in a local
/// database and generates plain-text minutes for distribution.
#[derive(Debug, Parser)]
#[command(name = "minutes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List meetings, newest first
    List(ListCommand),

    /// Show one meeting
    Show(ShowCommand),

    /// Create a meeting
    Create(CreateCommand),

    /// Change fields of a meeting
    Update(UpdateCommand),

    /// Manage the decisions of a meeting
    #[command(subcommand)]
    Decision(DecisionCommand),

    /// Manage the action items of a meeting
    #[command(subcommand)]
    Action(ActionCommand),

    /// Permanently delete a meeting
    Delete(DeleteCommand),

    /// Print the minutes of a meeting
    Render(RenderCommand),

    /// Write the minutes of a meeting to a text file
    Export(ExportCommand),

    /// Show storage status and collection summary
    Status(StatusCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether the command needs the active configuration to be loaded.
    ///
    /// `config path` and `config validate` inspect configuration files
    /// themselves, so they still run when the active one is broken.
    #[must_use]
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Self::Config(ConfigCommand::Path | ConfigCommand::Validate { .. })
        )
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
