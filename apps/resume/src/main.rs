mod config;
mod context;
mod errors;
mod generation;
mod models;
mod render;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Args, Config};
use crate::context::load_profile;
use crate::errors::ResumeError;
use crate::generation::{build_resume_view, TracingObserver};
use crate::render::{renderer_for, write_output};

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(args: Args) -> Result<()> {
    // Validate configuration first; nothing is read if the budgets are bad
    let config = Config::from_args(args)?;

    // Initialize structured logging (stderr, so `-o -` keeps stdout clean)
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let profile = load_profile(&config.input)
        .with_context(|| format!("Failed to load profile from {}", config.input.display()))?;

    let view = build_resume_view(&profile, &config.selection, &mut TracingObserver)?;
    info!(
        "Selected {} jobs and {} projects",
        view.jobs.len(),
        view.projects.len()
    );

    let renderer = renderer_for(config.format);
    let document = renderer.render(&view)?;

    match &config.output {
        Some(path) => {
            write_output(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Prints the error kind and message, and picks the exit status.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ResumeError>() {
        Some(resume_err) => {
            eprintln!("error[{}]: {err:#}", resume_err.code());
            ExitCode::from(resume_err.exit_code())
        }
        None => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
