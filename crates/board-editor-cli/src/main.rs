mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BOARD_EDITOR_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Apply(args) => {
            handlers::apply::handle(config_path, args).await?;
        }
        Commands::Board(board_cmd) => {
            let result = match CliContext::load(config_path) {
                Ok(ctx) => handlers::board::handle(&ctx, board_cmd.action).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
        Commands::Swimlanes(swimlane_cmd) => {
            let result = match CliContext::load(config_path) {
                Ok(ctx) => handlers::swimlanes::handle(&ctx, swimlane_cmd.action).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
