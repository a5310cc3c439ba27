//! Run a stream of `--task` commands, each driven through a progress bar
//!
//! `cli-actions run --task --name build --steps 20 --task --name test` parses
//! every `--task` segment independently and renders one progress bar per task.

use crate::actions::{ClapParser, MultiCommand, ParsedCommand};
use crate::utils::colors::Theme;
use crate::utils::formatting::{format_commands_human, render, OutputFormat};
use crate::utils::progress::Progress;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Marker that starts each task segment
pub const TASK_MARKER: &str = "--task";

/// Arguments accepted by a single `--task` segment
#[derive(Parser, Debug, Clone, PartialEq, Eq, Serialize)]
#[command(about = "A single task in a run stream")]
pub struct TaskArgs {
    /// Label shown next to the progress bar
    #[arg(long)]
    pub name: Option<String>,

    /// Number of steps to drive the bar through
    #[arg(long, default_value_t = 10)]
    pub steps: u64,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Abort the task when this step is reached
    #[arg(long)]
    pub fail_at: Option<u64>,
}

/// What happened to one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    #[serde(flatten)]
    pub task: TaskArgs,
    pub completed: u64,
    pub success: bool,
}

/// Run command arguments
#[derive(Debug, Clone)]
pub struct RunRequest<'a> {
    pub tokens: &'a [String],
    /// Extra arguments per marker, appended to every invocation
    pub additional_args: Vec<(String, Vec<String>)>,
    pub name_padding: Option<usize>,
    pub number_padding: Option<usize>,
    pub output_format: OutputFormat,
}

/// Parse and run every task, drawing progress on stdout (human) or stderr (json)
///
/// # Errors
///
/// Returns an `ActionError` if the token stream cannot be parsed, a task has
/// zero steps, or progress output fails
pub fn execute(request: &RunRequest<'_>) -> Result<String> {
    let writer: Box<dyn Write> = match request.output_format {
        OutputFormat::Human => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    execute_with_writer(request, writer)
}

/// Same as [`execute`] but renders progress to `writer`
///
/// # Errors
///
/// See [`execute`]
pub fn execute_with_writer<W: Write>(request: &RunRequest<'_>, writer: W) -> Result<String> {
    let mut dispatcher = MultiCommand::new().command(TASK_MARKER, ClapParser::<TaskArgs>::new());
    for (marker, args) in &request.additional_args {
        dispatcher = dispatcher.additional_args(marker.as_str(), args.iter().cloned());
    }

    let tasks = dispatcher.parse(request.tokens)?;

    let mut progress = Progress::with_writer(writer)
        .name_padding(request.name_padding)
        .number_padding(request.number_padding);

    let mut outcomes = Vec::with_capacity(tasks.len());
    for ParsedCommand { subcommand, args } in tasks {
        let outcome = run_task(&mut progress, args)?;
        info!(
            command = %subcommand,
            name = outcome.task.name.as_deref().unwrap_or_default(),
            completed = outcome.completed,
            success = outcome.success,
            "task finished"
        );
        outcomes.push(ParsedCommand {
            subcommand,
            args: outcome,
        });
    }

    render(request.output_format, &outcomes, |outcomes| {
        format_commands_human(outcomes, |outcome| {
            let status = if outcome.success { "done" } else { "failed" };
            format!(
                "{} {}/{} {}",
                outcome.task.name.as_deref().unwrap_or("(unnamed)"),
                outcome.completed,
                outcome.task.steps,
                Theme::outcome(outcome.success, status)
            )
        })
    })
}

fn run_task<W: Write>(progress: &mut Progress<W>, task: TaskArgs) -> Result<TaskOutcome> {
    progress.start(task.steps, task.name.as_deref())?;

    let delay = Duration::from_millis(task.delay_ms);
    let mut completed = 0;
    for step in 1..=task.steps {
        if task.fail_at == Some(step) {
            progress.finish(false)?;
            return Ok(TaskOutcome {
                task,
                completed,
                success: false,
            });
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        completed = step;
        progress.print(step)?;
    }

    progress.finish(true)?;
    Ok(TaskOutcome {
        task,
        completed,
        success: true,
    })
}
