use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, warn};
use travelcraft::client::failure_response;
use travelcraft::telemetry::{self, Verbosity};
use travelcraft::{
    PlannerSession, SubmitOutcome, TravelCraftConfig, ViewModel, WebhookClient, normalize,
};

mod cli;
mod interactive;

use cli::{Cli, Commands, PlanArgs, RenderArgs};

/// Exit status when the itinerary could not be generated
const FAILURE_EXIT: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("travelcraft error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = TravelCraftConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    let _telemetry =
        telemetry::init_tracing(&config.logging, Verbosity::from_flags(cli.quiet, cli.verbose))?;
    debug!(webhook = %config.webhook.url, "Configuration loaded");

    match &cli.command {
        Commands::Plan(args) => plan(&config, args, !cli.quiet).await,
        Commands::Render(args) => render(args),
        Commands::Interactive => {
            let session = new_session(&config, !cli.quiet)?;
            interactive::run(&session).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn new_session(config: &TravelCraftConfig, show_progress: bool) -> Result<PlannerSession> {
    let client = WebhookClient::new(&config.webhook).context("Failed to create HTTP client")?;
    Ok(PlannerSession::new(Arc::new(client)).with_progress(show_progress))
}

async fn plan(config: &TravelCraftConfig, args: &PlanArgs, show_progress: bool) -> Result<ExitCode> {
    let request = args.to_form().submit()?;
    let session = new_session(config, show_progress)?;

    match session.submit(request).await {
        SubmitOutcome::Settled(view) => present(&view, args.json),
        SubmitOutcome::Ignored => anyhow::bail!("A trip request is already in progress"),
    }
}

fn render(args: &RenderArgs) -> Result<ExitCode> {
    let body = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let response = serde_json::from_str::<Value>(&body).unwrap_or_else(|e| {
        warn!("{} is not valid JSON: {}", args.file.display(), e);
        failure_response()
    });

    present(&normalize(Some(&response)), args.json)
}

fn present(view: &ViewModel, json: bool) -> Result<ExitCode> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(view).context("Failed to serialize view model")?
        );
    } else {
        print!("{view}");
    }

    Ok(if view.is_failure() {
        ExitCode::from(FAILURE_EXIT)
    } else {
        ExitCode::SUCCESS
    })
}
