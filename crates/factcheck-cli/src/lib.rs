//! Command-line front end for FactCheckit.
//!
//! - `Cli`, `Commands`: argument definitions via clap
//! - `Display`: styled terminal output and the loading spinner
//! - `commands`: one function per subcommand

pub mod cli;
pub mod commands;
pub mod display;

pub use cli::{Cli, Commands};
pub use commands::AppContext;
pub use display::Display;
