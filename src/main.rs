use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::config::RosterConfig;
use roster::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let context = || load_context(cli.config.as_deref(), &cwd);

    match cli.command {
        Commands::Init => handle_init(&cwd),
        Commands::Serve { host, port } => handle_serve(&context()?, host, port),
        Commands::Query { query, variables } => {
            handle_query(&context()?, &query, variables.as_deref())
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(&context()?, &mutation, variables.as_deref()),
    }
}

fn load_context(config_path: Option<&Path>, cwd: &Path) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => RosterConfig::load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            RosterConfig::load_or_default(cwd).context("Failed to load roster configuration")?
        }
    };
    tracing::debug!(
        root = %root.display(),
        seed = config.store.seed.len(),
        "Configuration loaded"
    );
    Ok(CommandContext::new(config))
}
