use crate::cli::ApplyArgs;
use board_editor_client::BoardCommands;
use board_editor_core::{BoardEditorResult, EditorConfig};
use board_editor_domain::{load_swimlane_file, SwimlaneSpec};
use std::path::Path;

/// Everything a subcommand needs, built once from configuration.
pub struct CliContext {
    pub config: EditorConfig,
    pub commands: BoardCommands,
}

impl CliContext {
    pub fn load(config_path: Option<&Path>) -> BoardEditorResult<Self> {
        let config = EditorConfig::load(config_path)?;
        tracing::debug!(?config, "Resolved configuration");
        let commands = BoardCommands::from_config(&config)?;
        Ok(Self { config, commands })
    }
}

/// Swimlanes to apply, top lane first. Read before anything touches the network.
pub fn swimlane_specs(args: &ApplyArgs) -> BoardEditorResult<Vec<SwimlaneSpec>> {
    match &args.swimlanes {
        Some(path) => load_swimlane_file(path),
        None => args.set.specs(),
    }
}
