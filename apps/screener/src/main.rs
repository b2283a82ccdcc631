mod config;
mod errors;
mod matching;
mod models;
mod screening;

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::engine::ScreeningEngine;
use crate::matching::inference::SkillInference;
use crate::matching::synonyms::SynonymTable;

fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr — stdout carries the response
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    let table = match &config.synonyms_path {
        Some(path) => SynonymTable::from_path(path)
            .with_context(|| format!("loading synonym table from {}", path.display()))?,
        None => SynonymTable::default(),
    };
    info!(groups = table.group_count(), "synonym table loaded");

    let inference = SkillInference::default();
    info!(patterns = inference.pattern_count(), "inference patterns compiled");

    let engine = ScreeningEngine::new(table, inference, config.match_threshold);
    info!(threshold = config.match_threshold, "screening engine ready");

    let raw_request = read_request().context("reading screening request")?;
    let response = screening::run(&engine, &raw_request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Reads the request JSON from the first CLI argument (a file path) or, when
/// absent, from stdin.
fn read_request() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading request file '{path}'")),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
