use anyhow::{Context, Result};

use crate::analysis::gap_analyzer::GapThresholds;

/// Application configuration loaded from environment variables.
/// Every setting has a default; the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_origins: Vec<String>,
    pub gap_thresholds: GapThresholds,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            cors_origins: env_or(
                "CORS_ORIGINS",
                "http://localhost:5173,http://localhost:5000",
            )
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
            gap_thresholds: GapThresholds {
                critical_gap: env_or("GAP_CRITICAL_THRESHOLD", "3")
                    .parse::<u8>()
                    .context("GAP_CRITICAL_THRESHOLD must be a small integer")?,
                high_gap: env_or("GAP_HIGH_THRESHOLD", "2")
                    .parse::<u8>()
                    .context("GAP_HIGH_THRESHOLD must be a small integer")?,
                hours_per_level: env_or("HOURS_PER_LEVEL", "20")
                    .parse::<f64>()
                    .context("HOURS_PER_LEVEL must be a number of hours")?,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
