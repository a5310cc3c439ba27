//! Custom argument actions
//!
//! Each action post-processes the raw values clap collected for one argument.
//! Failures are reported as [`ActionError`](crate::errors::ActionError), which
//! converts into a clap usage error.

pub mod chunks;
pub mod colour;
pub mod filepath;
pub mod multi_command;

pub use chunks::Chunks;
pub use colour::{Channel, Colour, Rgba};
pub use filepath::Filepath;
pub use multi_command::{ClapParser, MultiCommand, ParsedCommand, Segment, SubParser};
