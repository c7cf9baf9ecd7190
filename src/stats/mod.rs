//! Stats module - average-rank aggregation

mod calculator;

pub use calculator::{RankCalculator, RankingEntry};
