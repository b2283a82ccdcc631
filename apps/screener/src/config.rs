use std::path::PathBuf;

use anyhow::{Context, Result};

/// Fuzzy-match acceptance threshold used when `MATCH_THRESHOLD` is not set.
pub const DEFAULT_MATCH_THRESHOLD: u32 = 75;

/// Application configuration loaded from environment variables.
/// Every knob has a default; the process starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum fuzzy score (1–100) for a match to count as satisfied.
    pub match_threshold: u32,
    /// Optional path to a JSON synonym table replacing the built-in default.
    pub synonyms_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_threshold = match std::env::var("MATCH_THRESHOLD") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("MATCH_THRESHOLD must be an integer")?,
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };
        if !(1..=100).contains(&match_threshold) {
            anyhow::bail!("MATCH_THRESHOLD must be between 1 and 100, got {match_threshold}");
        }

        Ok(Config {
            match_threshold,
            synonyms_path: std::env::var("SYNONYMS_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
