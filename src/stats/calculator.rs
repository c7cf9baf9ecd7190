//! Ranking Calculator Module
//! Computes per-item average ranks and the sorted ranking.

use polars::prelude::*;
use std::cmp::Ordering;

/// One ranked survey item. Lower average rank means stronger preference.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub label: String,
    pub average_rank: f64,
}

/// Handles the average-rank aggregation and ordering.
pub struct RankCalculator;

impl RankCalculator {
    /// Compute the mean rank per item over the coerced respondent rows.
    ///
    /// Nulls are excluded from both numerator and denominator; a column with
    /// no numeric responses at all averages to NaN. Results keep the
    /// original column order of the label map.
    pub fn mean_ranks(
        df: &DataFrame,
        labels: &[(String, String)],
    ) -> Result<Vec<RankingEntry>, PolarsError> {
        let mut entries = Vec::with_capacity(labels.len());
        for (column, label) in labels {
            let mean = df.column(column)?.f64()?.mean().unwrap_or(f64::NAN);
            entries.push(RankingEntry {
                label: label.clone(),
                average_rank: mean,
            });
        }
        Ok(entries)
    }

    /// Sort entries ascending by average rank. The sort is stable, so tied
    /// items keep their original column order; NaN averages sort last.
    pub fn sort_ascending(entries: &mut [RankingEntry]) {
        entries.sort_by(|a, b| {
            match (a.average_rank.is_nan(), b.average_rank.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a
                    .average_rank
                    .partial_cmp(&b.average_rank)
                    .unwrap_or(Ordering::Equal),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, rank: f64) -> RankingEntry {
        RankingEntry {
            label: label.to_string(),
            average_rank: rank,
        }
    }

    #[test]
    fn mean_ignores_missing_values() {
        let df = DataFrame::new(vec![Column::new(
            "Q35_1".into(),
            vec![Some(1.0), None, Some(3.0)],
        )])
        .unwrap();
        let labels = vec![("Q35_1".to_string(), "Tax Accounting".to_string())];

        let entries = RankCalculator::mean_ranks(&df, &labels).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Tax Accounting");
        assert_eq!(entries[0].average_rank, 2.0);
    }

    #[test]
    fn all_missing_column_averages_to_nan() {
        let df = DataFrame::new(vec![Column::new(
            "Q35_1".into(),
            vec![None::<f64>, None, None],
        )])
        .unwrap();
        let labels = vec![("Q35_1".to_string(), "Audit".to_string())];

        let entries = RankCalculator::mean_ranks(&df, &labels).unwrap();
        assert!(entries[0].average_rank.is_nan());
    }

    #[test]
    fn scenario_means_and_stable_tie_order() {
        // Respondents rank A,B,C as [1,2,3], [2,1,3], [3,3,1]
        let df = DataFrame::new(vec![
            Column::new("Q35_1".into(), vec![1.0, 2.0, 3.0]),
            Column::new("Q35_2".into(), vec![2.0, 1.0, 3.0]),
            Column::new("Q35_3".into(), vec![3.0, 3.0, 1.0]),
        ])
        .unwrap();
        let labels = vec![
            ("Q35_1".to_string(), "A".to_string()),
            ("Q35_2".to_string(), "B".to_string()),
            ("Q35_3".to_string(), "C".to_string()),
        ];

        let mut entries = RankCalculator::mean_ranks(&df, &labels).unwrap();
        assert_eq!(entries[0].average_rank, 2.0);
        assert_eq!(entries[1].average_rank, 2.0);
        assert!((entries[2].average_rank - 7.0 / 3.0).abs() < 1e-12);

        RankCalculator::sort_ascending(&mut entries);
        let order: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        // A and B are tied; stable sort keeps A first
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn sort_is_ascending_with_nan_last() {
        let mut entries = vec![
            entry("x", f64::NAN),
            entry("y", 3.5),
            entry("z", 1.25),
        ];
        RankCalculator::sort_ascending(&mut entries);

        assert_eq!(entries[0].label, "z");
        assert_eq!(entries[1].label, "y");
        assert!(entries[2].average_rank.is_nan());
        for pair in entries.windows(2) {
            if pair[0].average_rank.is_nan() || pair[1].average_rank.is_nan() {
                continue;
            }
            assert!(pair[0].average_rank <= pair[1].average_rank);
        }
    }
}
