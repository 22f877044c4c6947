pub mod args;
pub mod commands;
pub mod explore;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
pub use explore::{ExploreCommand, ExploreSession};
