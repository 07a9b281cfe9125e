//! Emit command: write the assembled settings mapping as JSON.

use crate::assembly;
use crate::cli::EmitArgs;
use crate::config;
use anyhow::{Context, Result};

/// Run the emit command.
pub fn run(args: &EmitArgs) -> Result<()> {
    let config = config::load()?;
    let settings = assembly::assemble(&config, &args.source_dir)
        .with_context(|| "Failed to assemble the renderer settings")?;

    let mut json = serde_json::to_string_pretty(&settings)
        .with_context(|| "Failed to serialize the settings mapping")?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} settings written to {}", settings.len(), path.display());
        }
        None => print!("{json}"),
    }

    Ok(())
}
