use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "factcheck")]
#[command(author, version, about = "Verify news claims against the FactCheckit API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the verification API
    #[arg(long, global = true, env = "FACTCHECK_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "FACTCHECK_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Templates file overriding the built-in output templates
    #[arg(long, global = true, env = "FACTCHECK_TEMPLATES")]
    pub templates: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Verify a single claim (reads stdin when CLAIM is omitted)
    Verify {
        /// Claim or headline to verify
        claim: Option<String>,

        /// Print the API response as JSON, unmodelled fields included
        #[arg(long)]
        json: bool,
    },

    /// Verify claims one after another at a prompt
    Interactive,

    /// Check that the verification API is up
    Health,

    /// Show tips and examples for writing verifiable claims
    Tips,
}
