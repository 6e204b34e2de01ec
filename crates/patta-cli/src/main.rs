//! Patta CLI - Command-line interface for forest-rights claim review and village decision support.

use clap::Parser;
use patta_cli::commands;
use patta_cli::{Cli, Command, Config, Formatter, Session};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays machine-readable)
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> patta_cli::Result<()> {
    // Load config, falling back to defaults when no file exists
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let claims_path = config.claims_path(cli.claims.as_deref())?;
    let villages_path = config.villages_path(cli.villages.as_deref())?;
    let mut session = Session::open(&config, claims_path, villages_path, formatter)?;

    match cli.command {
        Command::Intake(args) => commands::execute_intake(args, &mut session)?,
        Command::Attach(args) => commands::execute_attach(args, &mut session)?,
        Command::Claims(args) => commands::execute_claims(args, &session)?,
        Command::Queue => commands::execute_queue(&session)?,
        Command::Review(args) => commands::execute_review(args, &mut session)?,
        Command::Edit(args) => commands::execute_edit(args, &mut session)?,
        Command::Link(args) => commands::execute_link(args, &mut session)?,
        Command::Aggregate(args) => commands::execute_aggregate(args, &session)?,
        Command::Recommend(args) => commands::execute_recommend(args, &session)?,
        Command::Rules => commands::execute_rules(&session)?,
        Command::Villages => commands::execute_villages(&session)?,
    }

    Ok(())
}
