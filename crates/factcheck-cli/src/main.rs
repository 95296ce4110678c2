use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use factcheck_cli::commands::{cmd_health, cmd_interactive, cmd_tips, cmd_verify};
use factcheck_cli::{AppContext, Cli, Commands, Display};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            Display::new().print_error(&format!("✗ {:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("factcheck=debug")
        } else {
            EnvFilter::new("factcheck=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let ctx = AppContext::from_cli(&cli)?;

    match cli.command {
        Commands::Verify { claim, json } => cmd_verify(&ctx, claim, json).await,
        Commands::Interactive => cmd_interactive(&ctx).await.map(|()| true),
        Commands::Health => cmd_health(&ctx).await,
        Commands::Tips => cmd_tips(&ctx).map(|()| true),
    }
}
