mod cli;
mod commands;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;
use std::path::{Path, PathBuf};

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level unless RUST_LOG says otherwise
    //   default  → "off" (clean terminal output)
    //   RUST_LOG → honoured only with --verbose, so developer env vars
    //              don't leak log lines into user-facing output.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color flag or NO_COLOR env var is set.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    match &cli.command {
        Commands::Generate { input, output } => {
            let cache_path = cache_path(&cli, output);
            let columns = input::load_columns(cli.columns.as_deref())?;
            commands::generate::run(input, output, &cache_path, columns, cli.quiet)
        }

        Commands::Combine { inputs, output } => {
            commands::combine::run(inputs, output, cli.quiet)
        }

        Commands::Validate {
            file,
            expect_deliverables,
        } => commands::validate::run(file, *expect_deliverables, cli.quiet),

        Commands::Run {
            input,
            fragments,
            output,
        } => {
            let cache_path = cache_path(&cli, output);
            let columns = input::load_columns(cli.columns.as_deref())?;
            commands::run::run(input, fragments, output, &cache_path, columns, cli.quiet)
        }
    }
}

/// Resolve the identifier cache path: explicit `--cache` flag, otherwise
/// `gupri_mappings.json` next to the output document.
fn cache_path(cli: &Cli, output: &Path) -> PathBuf {
    if let Some(path) = &cli.cache {
        return path.clone();
    }
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dir.join("gupri_mappings.json")
}
