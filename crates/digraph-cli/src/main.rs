mod cli;
mod context;
mod handlers;
mod op;
mod output;
mod point;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use digraph_core::{AppConfig, OutputFormat};
use output::Printer;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("DIGRAPH_DEBUG_LOG") {
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

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                tracing::warn!("config file {} not found, using defaults", path.display());
            }
            AppConfig::load_from(path)
        }
        None => AppConfig::load(),
    };
    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or_else(|| config.effective_format());
    let printer = Printer::new(format);
    tracing::debug!(?format, sort_output = config.sort_output, "configuration resolved");

    match cli.command {
        Commands::Demo => handlers::demo::handle(&printer, config.sort_output)?,
        Commands::Run(args) => handlers::run::handle(&printer, config.sort_output, args)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "digraph", &mut std::io::stdout());
        }
    }

    Ok(())
}
