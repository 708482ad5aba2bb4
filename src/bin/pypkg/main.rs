//! pypkg CLI - Python packaging files for generated bindings

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pypkg::util::config::{global_config_path, load_config, project_config_path};
use pypkg::util::diagnostic::Diagnostic;
use pypkg::util::Shell;
use pypkg::SetupError;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pypkg=debug")
    } else {
        EnvFilter::new("pypkg=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    );

    if let Err(e) = run(cli.command, &shell) {
        let diag = match e.downcast_ref::<SetupError>() {
            Some(setup) => setup.to_diagnostic(),
            None => Diagnostic::error(format!("{:#}", e)),
        };
        shell.diagnostic(&diag);
        std::process::exit(1);
    }
}

fn run(command: Commands, shell: &Shell) -> Result<()> {
    let global = global_config_path();
    let config = load_config(global.as_deref(), &project_config_path(Path::new(".")));

    match command {
        Commands::Setup(args) => commands::setup::execute(args, shell, &config),
        Commands::Render(args) => commands::render::execute(args, shell, &config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
