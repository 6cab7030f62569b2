use crate::types::{Config, WebCompileError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names, checked in order
const CONFIG_FILE_NAMES: &[&str] = &["compilerconfig.json", "compilerconfig.jsonc"];

/// Find the default config file in a directory
pub fn find_default_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}

/// Load config entries from a compilerconfig.json / .jsonc file.
///
/// Comments are stripped before parsing, so both plain JSON and JSONC work.
/// Unreadable or unparsable files are loader errors; totality only applies
/// to per-key option resolution, not to broken files.
pub fn load_configs(path: &Path) -> Result<Vec<Config>, WebCompileError> {
    let mut content = fs::read_to_string(path)?;
    json_strip_comments::strip(&mut content)?;
    let configs: Vec<Config> = serde_json::from_str(&content)?;
    Ok(configs)
}
