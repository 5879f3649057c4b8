use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    let commands = &ctx.commands;
    match action {
        BoardAction::Find { name } => {
            let board = commands.find_board(&name).await?;
            output::output_success(&board)?;
        }
        BoardAction::Copy { id, name } => {
            let source = commands.get_board(id).await?;
            let hint = name.unwrap_or_else(|| format!("Copy of {}", source.name));
            let copy = commands.copy_board(&source, &hint).await?;
            output::output_success(&copy)?;
        }
        BoardAction::Delete { id } => {
            commands.delete_board(id).await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
    }
    Ok(())
}
