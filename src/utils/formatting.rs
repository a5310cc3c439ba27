//! Output formatting utilities for cli-actions

use crate::actions::{ParsedCommand, Rgba};
use crate::utils::colors::Theme;
use anyhow::Result;
use serde::Serialize;
use std::fmt::{Display, Write};

/// Output format for command results
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    ///
    /// # Errors
    ///
    /// Returns an error if the format is neither `human` nor `json`
    pub fn parse(format_str: &str) -> Result<Self> {
        match format_str.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid output format: {format_str}")),
        }
    }
}

/// Render `data` as JSON, or call `human` for the human-readable form
///
/// JSON output is wrapped in a `{"success": true, "data": ...}` envelope.
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn render<T: Serialize>(
    format: OutputFormat,
    data: &T,
    human: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human(data)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "success": true,
            "data": data,
        }))?),
    }
}

/// Format chunked groups, one per line
#[must_use]
pub fn format_chunks_human(dest: &str, groups: &[Vec<String>]) -> String {
    let mut output = String::new();
    writeln!(
        &mut output,
        "{} {}",
        Theme::heading(&format!("{dest}:")),
        Theme::note(&format!("{} group(s)", groups.len()))
    )
    .unwrap();
    for (index, group) in groups.iter().enumerate() {
        writeln!(
            &mut output,
            "  {} {}",
            Theme::group(index),
            Theme::value(&group.join(" "))
        )
        .unwrap();
    }
    output.trim_end().to_string()
}

/// Format a colour as labelled channels
#[must_use]
pub fn format_colour_human<T: Copy + Display>(colour: &Rgba<T>) -> String {
    let channels = [
        ("red", colour.red),
        ("green", colour.green),
        ("blue", colour.blue),
        ("alpha", colour.alpha),
    ];
    channels
        .iter()
        .map(|(name, value)| {
            format!(
                "{}: {}",
                Theme::channel(name),
                Theme::value(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a list of parsed commands with a per-command summary line
#[must_use]
pub fn format_commands_human<T>(
    commands: &[ParsedCommand<T>],
    summary: impl Fn(&T) -> String,
) -> String {
    if commands.is_empty() {
        return Theme::note("No commands given").to_string();
    }

    let mut output = String::new();
    for (index, command) in commands.iter().enumerate() {
        writeln!(
            &mut output,
            "{} {} {}",
            Theme::outcome(true, "✓"),
            Theme::marker(&format!("{} #{}", command.subcommand, index + 1)),
            summary(&command.args)
        )
        .unwrap();
    }
    output.trim_end().to_string()
}
