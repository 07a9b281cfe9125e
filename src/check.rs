//! Check command: load the configuration, derive everything, report.
//!
//! Runs the same assembly as `emit`, so a version string that can't produce a
//! major.minor label fails here instead of in the middle of a rendering run.

use crate::assembly;
use crate::cli::SourceArgs;
use crate::config;
use crate::version::MajorMinor;
use anyhow::{Context, Result};

/// Run the check command.
pub fn run(args: &SourceArgs) -> Result<()> {
    let config = config::load()?;
    let settings = assembly::assemble(&config, &args.source_dir)
        .with_context(|| "Failed to assemble the renderer settings")?;

    let major_minor = MajorMinor::parse(&config.project.version)?;
    let languages: Vec<String> = config
        .language
        .supported
        .iter()
        .map(|l| l.code.clone())
        .collect();
    let epub_excludes = settings["epub_exclude_files"]
        .as_array()
        .map(Vec::len)
        .unwrap_or(0);

    println!("Project:        {}", config.project.name);
    println!(
        "Version:        {} (download label {})",
        config.project.version, major_minor
    );
    println!(
        "Languages:      {} (default {})",
        languages.join(", "),
        config.language.default
    );
    println!(
        "Copyright:      {}",
        settings["copyright"].as_str().unwrap_or_default()
    );
    println!("EPUB:           {epub_excludes} excluded pages");
    println!();
    println!(
        "{} renderer settings assembled from {}",
        settings.len(),
        config::CONFIG_FILE
    );

    Ok(())
}
