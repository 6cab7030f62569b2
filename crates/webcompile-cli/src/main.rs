use clap::Parser;

use webcompile::cli::{Cli, OutputFormat};
use webcompile::config::{find_default_config, load_configs};
use webcompile::reporter::{report_resolved_json, report_resolved_text};
use webcompile::resolve_all;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = if let Some(path) = &cli.config {
        // Use specified config file (error if not found)
        if !path.exists() {
            eprintln!("Error: Config file not found: {}", path.display());
            std::process::exit(1);
        }
        path.clone()
    } else {
        // Look for default config file in cwd
        match find_default_config(&cli.cwd) {
            Some(path) => path,
            None => {
                eprintln!(
                    "Error: No compilerconfig.json found in '{}'. Use --config to point at one.",
                    cli.cwd.display()
                );
                std::process::exit(1);
            }
        }
    };

    let configs = load_configs(&config_path)?;
    let resolved = resolve_all(&configs)?;

    match cli.format {
        OutputFormat::Text => report_resolved_text(&configs, &resolved),
        OutputFormat::Json => report_resolved_json(&resolved),
    }

    Ok(())
}
