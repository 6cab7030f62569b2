use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// One entry from the compiler config file: a single source file to be
/// transformed by a named compiler.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File to compile
    pub source_path: PathBuf,

    /// Where the compiled output goes
    pub output_path: PathBuf,

    /// Compiler family for this entry (e.g. "sass", "less", "stylus")
    pub compiler_name: String,

    /// Raw, untyped option values; keys are case-sensitive
    #[serde(default)]
    pub options: FxHashMap<String, String>,

    /// Whether the compiler should emit a source map for this entry
    #[serde(default)]
    pub source_map: bool,
}

/// Error types for webcompile operations
#[derive(Error, Debug)]
pub enum WebCompileError {
    #[error("No compiler named '{0}' is supported")]
    UnknownCompiler(String),

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// One diagnostic reported by a compiler run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerError {
    pub message: String,
    pub file_name: String,
    pub line_number: u32,
    pub column_number: u32,
    pub is_warning: bool,
}

/// Outcome of compiling one file
#[derive(Debug, Clone, Default)]
pub struct CompilerResult {
    pub file_name: String,
    pub has_errors: bool,
    pub errors: Vec<CompilerError>,
}
