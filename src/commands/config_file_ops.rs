//! Config file operations command handlers

use crate::config_file::ConfigFile;
use crate::utils::colors::Theme;
use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

/// Initialize a new config file
///
/// # Errors
///
/// Returns an error if the config file already exists (unless `force` is true),
/// or if the file cannot be created or written
pub fn init(force: bool) -> Result<String> {
    init_at(&ConfigFile::config_file_path()?, force)
}

/// Initialize a new config file at `path`
///
/// # Errors
///
/// See [`init`]
pub fn init_at(path: &Path, force: bool) -> Result<String> {
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config file already exists at: {}\n\
             Use --force to overwrite",
            path.display()
        ));
    }

    ConfigFile::new().save_to(path)?;

    let mut output = String::new();
    writeln!(
        &mut output,
        "{} Config file initialized at: {}",
        Theme::outcome(true, "✓"),
        Theme::value(&path.display().to_string())
    )?;
    writeln!(&mut output)?;
    writeln!(
        &mut output,
        "{}",
        Theme::note("Add [commands.\"--task\"] extra_args = [...] to append arguments to every task")
    )?;
    write!(
        &mut output,
        "{}",
        Theme::note("Use 'cli-actions config list' to view configuration")
    )?;
    Ok(output)
}

/// List all configuration values
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded
pub fn list() -> Result<String> {
    Ok(format_config(&ConfigFile::load()?))
}

fn format_config(config: &ConfigFile) -> String {
    let not_set = || Theme::note("(not set)");

    let mut output = String::new();
    writeln!(&mut output, "{}", Theme::heading("Configuration")).unwrap();
    writeln!(&mut output, "{}", Theme::note(&"=".repeat(50))).unwrap();

    writeln!(
        &mut output,
        "{:<16} {}",
        Theme::label("Output format:"),
        config
            .defaults
            .output_format
            .as_deref()
            .map_or_else(not_set, Theme::value)
    )
    .unwrap();
    writeln!(
        &mut output,
        "{:<16} {}",
        Theme::label("Name padding:"),
        config
            .progress
            .name_padding
            .map_or_else(not_set, |v| Theme::value(&v.to_string()))
    )
    .unwrap();
    write!(
        &mut output,
        "{:<16} {}",
        Theme::label("Number padding:"),
        config
            .progress
            .number_padding
            .map_or_else(not_set, |v| Theme::value(&v.to_string()))
    )
    .unwrap();

    for (marker, command) in &config.commands {
        write!(
            &mut output,
            "\n{:<16} {}",
            Theme::marker(marker),
            Theme::value(&command.extra_args.join(" "))
        )
        .unwrap();
    }

    output
}

/// Show config file path
///
/// # Errors
///
/// Returns an error if the config directory cannot be determined
pub fn path() -> Result<String> {
    let path = ConfigFile::config_file_path()?;
    Ok(format!("{}", path.display()))
}
