mod cli;

use std::io::{IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use scrub_core::{GeneratorRegistry, PatternSet, Redactor};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.log_file.as_deref())?;

    let patterns = match &cli.patterns {
        Some(path) => scrub_config::load_patterns(path)?,
        None => PatternSet::defaults(),
    };

    let input = match cli.text {
        Some(text) => text,
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                cli::Cli::command().print_help()?;
                std::process::exit(1);
            }
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            buffer
        }
    };

    let redactor = Redactor::new(patterns, GeneratorRegistry::new());
    let redacted = redactor.redact(&input);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &redacted)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!(path = %path.display(), "redacted text written");
        }
        None => println!("{redacted}"),
    }

    Ok(())
}

/// Initialize tracing, logging to stderr (or an optional log file) so
/// stdout carries only redacted output.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
