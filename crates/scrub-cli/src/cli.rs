use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Replaces PII in text with synthetic values", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input text to redact; read from stdin when omitted
    pub text: Option<String>,

    /// Path to a JSON file of custom category-to-regex patterns
    /// (replaces the built-in set)
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
