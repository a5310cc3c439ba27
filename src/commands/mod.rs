//! Command implementations for the cli-actions binary
//!
//! Each subcommand lives in its own file and returns the text to print.

pub mod chunks;
pub mod colour;
pub mod completions;
pub mod config_file_ops;
pub mod path;
pub mod run;

// Re-export command execution functions for easy access
pub use chunks::execute as execute_chunks;
pub use colour::execute as execute_colour;
pub use completions::execute as execute_completions;
pub use path::execute as execute_path;
pub use run::execute as execute_run;
