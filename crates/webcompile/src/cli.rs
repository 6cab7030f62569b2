use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webcompile")]
#[command(about = "Resolve per-file compiler options from a compilerconfig file")]
pub struct Cli {
    /// Path to config file (compilerconfig.json or compilerconfig.jsonc)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, default_value = ".")]
    pub cwd: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
