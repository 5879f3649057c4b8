use board_editor_domain::{BoardId, SwimlaneSet};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "board-editor")]
#[command(about = "Rebuilds the query-based swimlanes of a JIRA kanban board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (or set BOARD_EDITOR_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "BOARD_EDITOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace a board's swimlanes with query-based ones
    Apply(ApplyArgs),
    /// Board operations
    Board(BoardCommand),
    /// Swimlane operations
    Swimlanes(SwimlanesCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Exact name of the kanban board
    #[arg(long, env = "BOARD_EDITOR_BOARD")]
    pub board: String,
    /// Built-in swimlane set to apply
    #[arg(long, default_value = "test", conflicts_with = "swimlanes")]
    pub set: SwimlaneSet,
    /// TOML file of [[swimlane]] tables, top lane first
    #[arg(long, value_name = "FILE")]
    pub swimlanes: Option<PathBuf>,
    /// Leave the board's current custom swimlanes in place
    #[arg(long)]
    pub keep_existing: bool,
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Find a kanban board by exact name
    Find {
        #[arg(long)]
        name: String,
    },
    /// Copy a board; the service chooses the copy's name
    Copy {
        /// Id of the board to copy
        #[arg(long)]
        id: BoardId,
        /// Preferred name for the copy (not honored by the service)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a board
    Delete {
        #[arg(long)]
        id: BoardId,
    },
}

// Swimlane commands
#[derive(Args)]
pub struct SwimlanesCommand {
    #[command(subcommand)]
    pub action: SwimlaneAction,
}

#[derive(Subcommand)]
pub enum SwimlaneAction {
    /// List the custom swimlanes of a board
    List {
        #[arg(long)]
        board: String,
    },
    /// Delete every non-default custom swimlane of a board
    Clear {
        #[arg(long)]
        board: String,
    },
}
