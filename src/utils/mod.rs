//! Utility modules for cli-actions
//!
//! This module contains shared utilities used across multiple commands.

pub mod colors;
pub mod formatting;
pub mod progress;
