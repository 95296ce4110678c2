//! Subcommand implementations
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use factcheck_client::{complete_verification, ClientConfig, VerifyClient};
use factcheck_core::{
    FactcheckError, Phase, VerificationSession, VerifyResponse, FACTCHECK_VERSION,
};
use factcheck_out::{load_renderer, RenderedCard, TemplateRenderer};

use crate::cli::Cli;
use crate::display::Display;

/// Everything a command needs: the API client, templates and terminal output
pub struct AppContext {
    pub client: VerifyClient,
    pub renderer: TemplateRenderer<'static>,
    pub display: Display,
}

impl AppContext {
    pub fn new(config: ClientConfig, templates: Option<&Path>) -> Result<Self> {
        let client = VerifyClient::new(config).context("invalid API configuration")?;

        let renderer = match templates {
            Some(path) => {
                let path = path.to_string_lossy();
                debug!(%path, "loading user templates");
                load_renderer(&path)?
            }
            None => TemplateRenderer::builtin().map_err(anyhow::Error::msg)?,
        };

        Ok(Self {
            client,
            renderer,
            display: Display::new(),
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = ClientConfig::default();
        if let Some(url) = &cli.api_url {
            config = config.with_api_url(url.as_str());
        }
        if let Some(secs) = cli.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Self::new(config, cli.templates.as_deref())
    }
}

/// Submit the session's current input, showing the loader while it is in flight
pub async fn submit(
    ctx: &AppContext,
    session: &mut VerificationSession,
    show_loader: bool,
) -> Result<(), FactcheckError> {
    let claim = session.submit()?;

    let spinner = if show_loader {
        let loader = ctx
            .renderer
            .render_loader(Some(claim.as_str()))
            .unwrap_or_default();
        ctx.display.print_dim(&loader);
        Some(ctx.display.create_spinner("Waiting for the verdict..."))
    } else {
        None
    };

    let result = complete_verification(session, &ctx.client, &claim).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result
}

/// The response as JSON, including fields this client does not interpret
pub fn response_json(response: &VerifyResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

/// Print the session's result or error; returns whether a verdict was shown
pub fn show_outcome(ctx: &AppContext, session: &VerificationSession, json: bool) -> Result<bool> {
    match session.phase() {
        Phase::Succeeded(response) => {
            if json {
                println!("{}", response_json(response)?);
            } else {
                let card: RenderedCard = ctx.renderer.render_result(response)?;
                ctx.display.print_card(&card);
            }
            Ok(true)
        }
        Phase::Failed { message } => {
            let text = ctx
                .renderer
                .render_error(message)
                .unwrap_or_else(|_| message.clone());
            ctx.display.print_error(&text);
            Ok(false)
        }
        Phase::Idle | Phase::Loading { .. } => Ok(false),
    }
}

/// `factcheck verify`
pub async fn cmd_verify(ctx: &AppContext, claim: Option<String>, json: bool) -> Result<bool> {
    let text = match claim {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read claim from stdin")?;
            buf
        }
    };

    let mut session = VerificationSession::new();
    session.set_input(text)?;

    // Validation failures are already recorded in the session.
    if let Err(err) = submit(ctx, &mut session, !json).await {
        debug!(error = %err, "claim not submitted");
    }

    show_outcome(ctx, &session, json)
}

/// `factcheck interactive`
pub async fn cmd_interactive(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    run_interactive(ctx, stdin.lock()).await?;
    Ok(())
}

/// Prompt loop over any line source; returns how many claims were sent
pub async fn run_interactive<R: BufRead>(ctx: &AppContext, input: R) -> Result<usize> {
    let banner = ctx
        .renderer
        .render_banner(FACTCHECK_VERSION, &ctx.client.config().api_url)?;
    ctx.display.print_header(&banner);
    ctx.display
        .print_info("Paste a claim and press Enter. Commands: :tips, :clear, :q");

    let mut session = VerificationSession::new();
    let mut lines = input.lines();
    let mut sent = 0;

    loop {
        print!("{}", style("claim> ").cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            ":q" | ":quit" => break,
            ":tips" => {
                ctx.display.print_block(&ctx.renderer.render_tips()?);
                continue;
            }
            ":clear" => {
                session.reset()?;
                ctx.display.print_info("Input cleared");
                continue;
            }
            _ => {}
        }

        session.set_input(line)?;
        ctx.display
            .print_dim(&ctx.renderer.render_input_status(session.input(), false)?);

        if !session.can_submit() {
            continue;
        }

        match submit(ctx, &mut session, true).await {
            Ok(()) => sent += 1,
            Err(err) => debug!(error = %err, "claim not submitted"),
        }
        show_outcome(ctx, &session, false)?;
    }

    Ok(sent)
}

/// `factcheck health`
pub async fn cmd_health(ctx: &AppContext) -> Result<bool> {
    let url = &ctx.client.config().api_url;

    let healthy = match ctx.client.health().await {
        Ok(status) if status.is_healthy() => {
            ctx.display
                .print_success(&format!("{} is {}", url, status.status));
            true
        }
        Ok(status) => {
            ctx.display
                .print_warning(&format!("{} reported status {:?}", url, status.status));
            false
        }
        Err(err) => {
            debug!(error = %err, "health check failed");
            ctx.display.print_error(&err.user_message());
            return Ok(false);
        }
    };

    match ctx.client.service_info().await {
        Ok(info) => {
            ctx.display.print_info(&info.message);
            if let Some(version) = &info.version {
                ctx.display.print_dim(&format!("  version {}", version));
            }
            for (name, path) in &info.endpoints {
                ctx.display.print_dim(&format!("  {:<8} {}", name, path));
            }
        }
        Err(err) => debug!(error = %err, "service info unavailable"),
    }

    Ok(healthy)
}

/// `factcheck tips`
pub fn cmd_tips(ctx: &AppContext) -> Result<()> {
    ctx.display.print_block(&ctx.renderer.render_tips()?);
    Ok(())
}
