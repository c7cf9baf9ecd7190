//! Survey ranking analyzer - batch entry point.
//!
//! Reads the fixed-name survey export from the working directory and writes
//! the sorted ranking CSV plus the bar chart figure.

use anyhow::Result;
use std::path::Path;
use survey_rank::pipeline::{self, CHART_PNG, INPUT_FILE, RANKING_CSV};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    pipeline::run(
        Path::new(INPUT_FILE),
        Path::new(RANKING_CSV),
        Path::new(CHART_PNG),
    )?;

    println!("Ranking successfully saved to {}", RANKING_CSV);
    println!("Figure successfully saved to {}", CHART_PNG);
    Ok(())
}
