//! cli-actions - Command-line front end for the argument actions and progress bar
//!
//! Exposes each custom argument action (chunks, colour, path, multi-command
//! dispatch) as a subcommand so they can be exercised from a real command line.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use cli_actions::commands::{self, colour::ColourRequest, run::RunRequest};
use cli_actions::config::ActionsConfig;
use cli_actions::config_file::ConfigFile;
use cli_actions::errors::ActionError;
use cli_actions::utils::colors::{self, Theme};
use cli_actions::utils::formatting::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cli-actions",
    version,
    about = "Custom argument actions and a terminal progress bar"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group values into fixed-size chunks
    Chunks {
        /// Number of values per chunk
        #[arg(long, short = 'n')]
        size: usize,

        /// Values to group
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Normalize 1, 3 or 4 values into an RGBA colour
    Colour {
        /// Use 0-255 integer channels instead of 0.0-1.0 floats
        #[arg(long)]
        integers: bool,

        /// Reject a fourth (alpha) value
        #[arg(long)]
        no_alpha: bool,

        /// Channel values
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Resolve a path to an absolute path
    Path {
        /// Fail if the path does not exist
        #[arg(long)]
        exists: bool,

        /// Path to resolve
        path: String,
    },

    /// Run a stream of `--task` commands, each with its own progress bar
    Run {
        /// Task stream, e.g. `--task --name build --steps 20 --task --name test`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        tokens: Vec<String>,
    },

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Name the subcommand is invoked by
    const fn name(&self) -> &'static str {
        match self {
            Self::Chunks { .. } => "chunks",
            Self::Colour { .. } => "colour",
            Self::Path { .. } => "path",
            Self::Run { .. } => "run",
            Self::Completions { .. } => "completions",
            Self::Config { .. } => "config",
        }
    }
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a config file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// List all configuration values
    List,

    /// Show config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    colors::init_colors(cli.no_color);

    let config = ActionsConfig::new();

    // Load config file (if it exists) for additional defaults
    let config_file = ConfigFile::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config file: {e:#}");
        ConfigFile::new()
    });

    // Precedence: CLI flags > env vars > config file > defaults
    let output_format = match cli.output {
        Some(format) => format,
        None if std::env::var("CLI_ACTIONS_OUTPUT_FORMAT").is_ok() => {
            OutputFormat::parse(&config.default_output_format)?
        }
        None => OutputFormat::parse(
            config_file
                .defaults
                .output_format
                .as_deref()
                .unwrap_or(&config.default_output_format),
        )?,
    };

    match execute_command(&cli, &config, &config_file, output_format) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            let e = match e.downcast::<ActionError>() {
                Ok(action_error) => {
                    if let Some(request) = help_request(&action_error) {
                        request.exit()
                    }
                    if output_format == OutputFormat::Human {
                        exit_with_usage(action_error, cli.command.name())
                    }
                    anyhow::Error::new(action_error)
                }
                Err(other) => other,
            };
            match output_format {
                OutputFormat::Human => eprintln!("{} {e:#}", Theme::outcome(false, "Error:")),
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "success": false,
                        "error": format!("{e:#}"),
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

/// A `--help` or `--version` given inside a command segment
fn help_request(error: &ActionError) -> Option<&clap::Error> {
    match error {
        ActionError::SubParser { cause, .. }
            if matches!(
                cause.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            Some(cause)
        }
        _ => None,
    }
}

/// Print `error` with the usage of the subcommand that raised it, then exit
fn exit_with_usage(error: ActionError, subcommand: &str) -> ! {
    let mut cmd = Cli::command();
    cmd.build();
    let usage_error = match cmd.find_subcommand_mut(subcommand) {
        Some(sub) => error.into_usage_error(sub),
        None => error.into_usage_error(&mut cmd),
    };
    usage_error.exit()
}

/// Log to stderr so diagnostics never interleave with progress output
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main command router
fn execute_command(
    cli: &Cli,
    config: &ActionsConfig,
    config_file: &ConfigFile,
    output_format: OutputFormat,
) -> Result<String> {
    match &cli.command {
        Commands::Chunks { size, values } => {
            commands::execute_chunks(*size, values.clone(), output_format)
        }

        Commands::Colour {
            integers,
            no_alpha,
            values,
        } => commands::execute_colour(&ColourRequest {
            values,
            integers: *integers,
            alpha: !*no_alpha,
            output_format,
        }),

        Commands::Path { exists, path } => commands::execute_path(path, *exists, output_format),

        Commands::Run { tokens } => commands::execute_run(&RunRequest {
            tokens,
            additional_args: config_file
                .additional_args()
                .map(|(marker, args)| (marker.to_string(), args.to_vec()))
                .collect(),
            name_padding: config.name_padding.or(config_file.progress.name_padding),
            number_padding: config
                .number_padding
                .or(config_file.progress.number_padding),
            output_format,
        }),

        Commands::Completions { shell } => commands::execute_completions(*shell, Cli::command()),

        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => commands::config_file_ops::init(*force),
            ConfigCommands::List => commands::config_file_ops::list(),
            ConfigCommands::Path => commands::config_file_ops::path(),
        },
    }
}
