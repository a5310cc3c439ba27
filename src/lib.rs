//! cli-actions library
//!
//! Custom clap argument actions (value chunking, colour normalization, path
//! resolution, multi-command dispatch) and a fixed-width progress bar.

#![forbid(unsafe_code)]

pub mod actions;
pub mod commands;
pub mod config;
pub mod config_file;
pub mod errors;
pub mod utils;

// Re-export for easy access
pub use actions::*;
pub use config::*;
pub use errors::*;
pub use utils::progress::Progress;
