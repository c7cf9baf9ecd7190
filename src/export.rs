//! Ranking CSV Export Module
//! Writes the sorted ranking to a delimited file with a header row.

use crate::stats::RankingEntry;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create ranking file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write ranking CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Writes the final ranking as `Course,Average_Rank` rows.
pub struct RankingExporter;

impl RankingExporter {
    /// Write the ranking to `path` in the order given. NaN averages are
    /// written as-is; the caller is responsible for sorting first.
    pub fn write_csv(ranking: &[RankingEntry], path: &Path) -> Result<(), ExportError> {
        let courses: Vec<String> = ranking.iter().map(|e| e.label.clone()).collect();
        let scores: Vec<f64> = ranking.iter().map(|e| e.average_rank).collect();

        let mut df = DataFrame::new(vec![
            Column::new("Course".into(), courses),
            Column::new("Average_Rank".into(), scores),
        ])?;

        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        Ok(())
    }
}
