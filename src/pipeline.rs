//! End-to-end analysis pipeline.
//!
//! One linear pass: load, select the question-group columns, derive labels,
//! drop metadata rows, coerce to numeric, average, sort, write CSV, render
//! the chart.

use crate::charts::BarChartRenderer;
use crate::data::{SurveyLoader, SurveyProcessor};
use crate::export::RankingExporter;
use crate::stats::{RankCalculator, RankingEntry};
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// The export is CSV content despite the spreadsheet extension.
pub const INPUT_FILE: &str = "Grad Program Exit Survey Data 2024.xlsx";

/// Name prefix shared by the course-ranking question columns.
pub const QUESTION_PREFIX: &str = "Q35";

pub const RANKING_CSV: &str = "final_ranking.csv";
pub const CHART_PNG: &str = "course_ranking_figure.png";

/// Run the full pipeline, producing both output files. Returns the sorted
/// ranking.
pub fn run(input: &Path, csv_out: &Path, chart_out: &Path) -> Result<Vec<RankingEntry>> {
    let mut loader = SurveyLoader::new();
    let df = loader
        .load_csv(input)
        .with_context(|| format!("loading survey export {}", input.display()))?
        .clone();
    info!(
        rows = loader.get_row_count(),
        cols = df.width(),
        "survey export loaded"
    );

    let question_cols = loader.columns_with_prefix(QUESTION_PREFIX);
    if question_cols.is_empty() {
        // Not an error: downstream outputs are simply empty
        warn!(prefix = QUESTION_PREFIX, "no question-group columns matched");
    }
    info!(matched = question_cols.len(), "question-group columns selected");

    let labels = SurveyProcessor::question_labels(&df, &question_cols)?;
    let respondents = SurveyProcessor::drop_metadata_rows(&df);
    let numeric = SurveyProcessor::numeric_responses(&respondents, &question_cols)?;
    info!(respondents = respondents.height(), "metadata rows dropped");

    let mut ranking = RankCalculator::mean_ranks(&numeric, &labels)?;
    RankCalculator::sort_ascending(&mut ranking);

    RankingExporter::write_csv(&ranking, csv_out)
        .with_context(|| format!("writing ranking to {}", csv_out.display()))?;
    info!(items = ranking.len(), "ranking written");

    BarChartRenderer::render(&ranking, chart_out)
        .map_err(|e| anyhow!("rendering chart to {}: {e}", chart_out.display()))?;
    info!("chart rendered");

    Ok(ranking)
}
