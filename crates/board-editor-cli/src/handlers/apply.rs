use crate::cli::ApplyArgs;
use crate::context::{swimlane_specs, CliContext};
use crate::output;
use board_editor_domain::SwimlaneStrategy;
use std::path::Path;
use tracing::info;

/// Find the board, optionally clear its custom swimlanes, switch it to
/// query-based swimlanes and create the requested lanes.
pub async fn handle(config_path: Option<&Path>, args: ApplyArgs) -> anyhow::Result<()> {
    let specs = swimlane_specs(&args)?;
    let ctx = CliContext::load(config_path)?;
    let commands = &ctx.commands;
    info!(
        board = %args.board,
        url = %ctx.config.base_url,
        swimlanes = specs.len(),
        "Applying swimlanes"
    );

    let board = commands.find_board(&args.board).await?;
    if !args.keep_existing {
        let deleted = commands.delete_custom_swimlanes(&board).await?;
        info!("Deleted {} existing swimlane(s)", deleted.len());
    }
    commands
        .set_swimlane_strategy(&board, SwimlaneStrategy::Queries)
        .await?;
    commands.apply_swimlanes(&board, &specs).await?;

    output::output_done();
    Ok(())
}
