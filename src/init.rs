//! Interactive creation of `guide-config.toml`.
//!
//! Prompts for the handful of settings that differ between releases (project
//! name, version, author, default language); everything else starts from the
//! defaults and can be edited in the written file afterwards.

use crate::config::{Configuration, CONFIG_FILE};
use crate::version::MajorMinor;
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input};
use std::path::PathBuf;

/// Run the init command.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut config = Configuration::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Project name")
        .with_initial_text(config.project.name.clone())
        .allow_empty(false)
        .interact()
        .with_context(|| "Failed to obtain project name")?;

    let version: String = Input::with_theme(&theme)
        .with_prompt("Full project version (e.g. v2.13.3)")
        .with_initial_text(config.project.version.clone())
        .validate_with(|input: &String| match MajorMinor::parse(input) {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("{e:#}")),
        })
        .interact()
        .with_context(|| "Failed to obtain version")?;

    let author: String = Input::with_theme(&theme)
        .with_prompt("Author / editor")
        .with_initial_text(config.project.author.clone())
        .allow_empty(false)
        .interact()
        .with_context(|| "Failed to obtain author")?;

    // default language is picked from the supported list rather than typed,
    // so it can't name a translation that doesn't exist
    let languages: Vec<String> = config
        .language
        .supported
        .iter()
        .map(|l| format!("{} ({})", l.code, l.name))
        .collect();
    let default_idx = FuzzySelect::with_theme(&theme)
        .with_prompt("Default language")
        .items(&languages)
        .default(0)
        .interact()?;

    config.project.name = name;
    config.project.version = version;
    config.project.author = author;
    config.language.default = config.language.supported[default_idx].code.clone();

    let config = toml::to_string_pretty(&config)
        .with_context(|| "Failed to convert configuration to TOML")?;

    let config_path = PathBuf::from(CONFIG_FILE);
    if config_path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!(
                "{CONFIG_FILE} already exists, do you want to override it?"
            ))
            .interact()?
    {
        println!("Configuration:");
        println!("{config}");
    } else {
        std::fs::write(&config_path, config)
            .with_context(|| "Failed to write configuration file")?;
        println!("{CONFIG_FILE} written!");
    }

    Ok(())
}
