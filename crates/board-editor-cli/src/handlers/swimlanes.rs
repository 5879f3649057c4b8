use crate::cli::SwimlaneAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: SwimlaneAction) -> anyhow::Result<()> {
    let commands = &ctx.commands;
    match action {
        SwimlaneAction::List { board } => {
            let board = commands.find_board(&board).await?;
            let swimlanes = commands.list_custom_swimlanes(&board).await?;
            output::output_list(swimlanes)?;
        }
        SwimlaneAction::Clear { board } => {
            let board = commands.find_board(&board).await?;
            let deleted = commands.delete_custom_swimlanes(&board).await?;
            output::output_list(deleted)?;
        }
    }
    Ok(())
}
