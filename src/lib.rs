//! Survey ranking analyzer.
//!
//! Ingests one Qualtrics-style survey export, averages the numeric ranking
//! responses of one question group, writes the sorted ranking as CSV and
//! renders it as a horizontal bar chart.

pub mod charts;
pub mod data;
pub mod export;
pub mod pipeline;
pub mod stats;
