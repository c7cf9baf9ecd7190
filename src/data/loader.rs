//! Survey Export Loader Module
//! Handles CSV loading of Windows-1252 survey exports using Polars.

use encoding_rs::WINDOWS_1252;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read survey export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Survey export is not valid Windows-1252 text")]
    Encoding,
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Loads a Qualtrics-style survey export into a Polars DataFrame.
///
/// Every column is parsed as a string column: the two leading metadata rows
/// are question text, so schema inference would misclassify the ranking
/// columns anyway. Numeric coercion happens explicitly downstream.
pub struct SurveyLoader {
    df: Option<DataFrame>,
}

impl Default for SurveyLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a survey CSV export, decoding it from Windows-1252 first.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        let raw = std::fs::read(file_path)?;
        let (text, _, had_errors) = WINDOWS_1252.decode(&raw);
        if had_errors {
            return Err(LoaderError::Encoding);
        }

        // infer_schema_length of 0 keeps every column as String
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(text.into_owned().into_bytes()))
            .finish()?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the columns belonging to one question group, identified by name
    /// prefix, in original column order.
    pub fn columns_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_columns()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }
}
