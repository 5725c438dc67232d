mod cli;
mod engine;
mod loader;
mod models;
mod predict;
mod render;
mod state;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Cli, Command, PredictArgs, ShowArgs};
use crate::engine::DashboardEngine;
use crate::loader::{RecordLoader, RecordSource};
use crate::models::Dataset;
use crate::predict::PredictionClient;
use crate::render::render;
use crate::state::AppState;
use crate::storage::{FileStorage, MemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.into());

    match &cli.command {
        Command::Show(args) => show(args, &cli.state_file).await,
        Command::Predict(args) => predict(args).await
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the rendered section, diagnostics stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn show(args: &ShowArgs, state_file: &Path) -> Result<()> {
    let state = AppState::initialize(args.section.as_deref(), open_store(state_file), args.config());
    let section = state.section();

    let source = RecordSource::from(args.source.as_str());

    let timer = Instant::now();
    let dataset = match RecordLoader::new().run(&source).await {
        Ok(dataset) => dataset,
        Err(error) => {
            error!("Failed to load records from {source}: {error}");
            Dataset::empty()
        }
    };
    info!("Loaded dataset in: {:?}", timer.elapsed());

    if dataset.is_empty() {
        warn!("No records available, filterable sections will be empty");
    }

    let engine = DashboardEngine::new(dataset, state.config().clone());

    let snapshot = if section.is_filterable() {
        let span_dataset = args.all || source.spans_whole_dataset();
        let range = engine.config().resolve_range(args.start.as_deref(), args.end.as_deref(), span_dataset, engine.dataset())?;
        Some(engine.snapshot(range).await)
    } else {
        None
    };

    let output = render(args.format, section, snapshot.as_deref(), engine.config())?;

    write_to_stdout(&output)
}

async fn predict(args: &PredictArgs) -> Result<()> {
    let client = PredictionClient::new(args.endpoint.as_str())?;

    match client.predict(&args.request()).await {
        Ok(prediction) => write_to_stdout(&format!("{prediction}\n")),
        Err(error) => {
            eprintln!("Prediction failed for [{}]: {error}", client.endpoint());
            exit(1);
        }
    }
}

fn open_store(path: &Path) -> Arc<dyn Storage> {
    match FileStorage::open(path) {
        Ok(storage) => {
            debug!("Session state at {}", storage.path().display());
            Arc::new(storage)
        }
        Err(error) => {
            warn!("{error}, falling back to in-memory session state");
            Arc::new(MemoryStorage::new())
        }
    }
}

fn write_to_stdout(text: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    output.write_all(text.as_bytes())?;
    output.flush()?;

    Ok(())
}
