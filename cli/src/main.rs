//! CLI entrypoint for expert-consult
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use consult_application::ConsultExpertUseCase;
use consult_domain::{Model, Persona};
use consult_infrastructure::{ConfigLoader, OpenAiGateway, load_dotenv};
use consult_presentation::{
    Cli, ConsoleFormatter, ConsultForm, FormConfig, FormRepl, OutputConfig, SpinnerProgress,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting expert-consult");

    // .env first: it may carry the API key and CONSULT_* overrides
    load_dotenv();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    // Command line flags override the config file
    let mut params = config.completion_params();
    if let Some(name) = &cli.model {
        let Ok(model) = name.parse::<Model>();
        params = params.with_model(model);
    }
    if let Some(secs) = cli.timeout {
        params = params.with_timeout(Some(Duration::from_secs(secs)));
    }

    let output = OutputConfig {
        format: cli.output.map(Into::into).unwrap_or(config.output.format),
        color: config.output.color && !cli.no_color,
    };
    output.apply_color();

    let persona: Persona = cli
        .persona
        .map(Into::into)
        .unwrap_or_else(|| config.form.default_persona.clone());

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::new(&config.completion)?);
    let use_case = ConsultExpertUseCase::new(gateway, params);
    let form = ConsultForm::new(use_case);

    let show_progress = cli.show_progress(config.form.show_progress);

    // Interactive form
    if cli.wants_form() {
        let form_config = FormConfig {
            default_persona: persona,
            show_progress,
            history_file: config.form.history_file.as_ref().map(PathBuf::from),
        };
        let mut repl = FormRepl::new(form, form_config, output.format);
        repl.run_with_initial(cli.question.as_deref()).await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single question mode
    let question = cli.question.unwrap_or_default();

    let submission = if show_progress {
        let progress = SpinnerProgress::new();
        form.submit_with_progress(&question, &persona, &progress)
            .await
    } else {
        form.submit(&question, &persona).await
    };

    ConsoleFormatter::print(&submission, output.format);

    Ok(ExitCode::from(submission.exit_code()))
}
