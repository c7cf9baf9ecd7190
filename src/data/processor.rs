//! Survey Data Processor Module
//! Handles metadata-row handling and numeric coercion of ranking columns.

use polars::prelude::*;
use thiserror::Error;

/// Qualtrics exports carry two metadata rows after the header: the question
/// text row and the import-id row.
pub const METADATA_ROWS: usize = 2;

/// Separator between the question text and the item name in the metadata row.
const LABEL_SEPARATOR: &str = "- ";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Handles cleaning and transformation of the loaded survey table.
pub struct SurveyProcessor;

impl SurveyProcessor {
    /// Derive a display label from one question-text cell: the substring
    /// after the last separator, trimmed. Text without a separator is used
    /// whole.
    pub fn extract_label(question_text: &str) -> String {
        question_text
            .rsplit(LABEL_SEPARATOR)
            .next()
            .unwrap_or(question_text)
            .trim()
            .to_string()
    }

    /// Build the label map from the question-text row (row 0 of the raw
    /// table), keeping original column order. An empty or missing cell
    /// yields an empty label rather than an error.
    pub fn question_labels(
        df: &DataFrame,
        columns: &[String],
    ) -> Result<Vec<(String, String)>, ProcessorError> {
        let mut labels = Vec::with_capacity(columns.len());
        for name in columns {
            let text = df.column(name)?.str()?.get(0).unwrap_or_default();
            labels.push((name.clone(), Self::extract_label(text)));
        }
        Ok(labels)
    }

    /// Drop the leading metadata rows, keeping only respondent answers.
    pub fn drop_metadata_rows(df: &DataFrame) -> DataFrame {
        df.slice(
            METADATA_ROWS as i64,
            df.height().saturating_sub(METADATA_ROWS),
        )
    }

    /// Coerce the selected columns to Float64. The cast is non-strict, so
    /// any value that does not parse becomes null instead of erroring.
    pub fn numeric_responses(
        df: &DataFrame,
        columns: &[String],
    ) -> Result<DataFrame, ProcessorError> {
        let mut coerced = Vec::with_capacity(columns.len());
        for name in columns {
            coerced.push(df.column(name)?.cast(&DataType::Float64)?);
        }
        Ok(DataFrame::new(coerced)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                "Q35_1".into(),
                vec![
                    "Q35 - Please rank the following - Tax Accounting",
                    "{\"ImportId\":\"QID35_1\"}",
                    "1",
                    "n/a",
                    "3",
                ],
            ),
            Column::new(
                "Q35_2".into(),
                vec!["Audit", "{\"ImportId\":\"QID35_2\"}", "2", "1", ""],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn label_is_text_after_last_separator() {
        assert_eq!(
            SurveyProcessor::extract_label("Q35 - Please rank... - Tax Accounting"),
            "Tax Accounting"
        );
    }

    #[test]
    fn label_without_separator_uses_whole_text() {
        assert_eq!(SurveyProcessor::extract_label("  Audit  "), "Audit");
    }

    #[test]
    fn labels_come_from_question_text_row() {
        let df = survey_frame();
        let cols = vec!["Q35_1".to_string(), "Q35_2".to_string()];
        let labels = SurveyProcessor::question_labels(&df, &cols).unwrap();
        assert_eq!(
            labels,
            vec![
                ("Q35_1".to_string(), "Tax Accounting".to_string()),
                ("Q35_2".to_string(), "Audit".to_string()),
            ]
        );
    }

    #[test]
    fn metadata_rows_are_dropped() {
        let data = SurveyProcessor::drop_metadata_rows(&survey_frame());
        assert_eq!(data.height(), 3);
        let first = data.column("Q35_1").unwrap().str().unwrap().get(0);
        assert_eq!(first, Some("1"));
    }

    #[test]
    fn coercion_turns_invalid_values_into_null() {
        let data = SurveyProcessor::drop_metadata_rows(&survey_frame());
        let cols = vec!["Q35_1".to_string(), "Q35_2".to_string()];
        let numeric = SurveyProcessor::numeric_responses(&data, &cols).unwrap();

        let q1 = numeric.column("Q35_1").unwrap().f64().unwrap();
        assert_eq!(q1.get(0), Some(1.0));
        assert_eq!(q1.get(1), None);
        assert_eq!(q1.get(2), Some(3.0));

        let q2 = numeric.column("Q35_2").unwrap().f64().unwrap();
        assert_eq!(q2.get(2), None);
    }
}
