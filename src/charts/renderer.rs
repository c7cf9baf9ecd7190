//! Static Chart Renderer
//! Renders the ranking as a horizontal bar chart PNG.
//!
//! Layout matches the original report figure: one bar per course in sorted
//! order, best (lowest average rank) at the top, fixed 10x6 inch canvas at
//! 300 DPI.

use crate::stats::RankingEntry;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Bar fill #4C72B0 with a black edge.
const BAR_COLOR: RGBColor = RGBColor(76, 114, 176);

/// 10x6 inches at 300 DPI.
const FIGURE_SIZE: (u32, u32) = (3000, 1800);

const TITLE: &str = "MAcc Core Course Rankings - Most to Least Beneficial (2024)";
const X_LABEL: &str = "Average Student Rank (Lower indicates higher preference)";
const Y_LABEL: &str = "MAcc Core Courses";

pub struct BarChartRenderer;

impl BarChartRenderer {
    /// Render the sorted ranking to a PNG at `path`.
    pub fn render(ranking: &[RankingEntry], path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let n = ranking.len() as i32;
        if n == 0 || !ranking.iter().any(|e| e.average_rank.is_finite()) {
            // Nothing to plot; still produce the (blank) image file
            root.present()?;
            return Ok(());
        }

        let max_rank = ranking
            .iter()
            .map(|e| e.average_rank)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        // All-zero averages still get a labeled axis frame
        let x_max = if max_rank > 0.0 { max_rank * 1.05 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 56))
            .margin(30)
            .x_label_area_size(140)
            .y_label_area_size(560)
            .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style(("sans-serif", 40))
            .label_style(("sans-serif", 32))
            // Row 0 is the bottom segment; the best item goes on top
            .y_label_formatter(&|seg: &SegmentValue<i32>| {
                let row = match seg {
                    SegmentValue::Exact(v) | SegmentValue::CenterOf(v) => *v,
                    SegmentValue::Last => return String::new(),
                };
                ranking
                    .get((n - 1 - row) as usize)
                    .map(|e| e.label.clone())
                    .unwrap_or_default()
            })
            .draw()?;

        let bars = |style: ShapeStyle| {
            ranking
                .iter()
                .enumerate()
                .filter(|(_, e)| e.average_rank.is_finite())
                .map(move |(i, e)| {
                    let row = n - 1 - i as i32;
                    Rectangle::new(
                        [
                            (0.0, SegmentValue::Exact(row)),
                            (e.average_rank, SegmentValue::Exact(row + 1)),
                        ],
                        style,
                    )
                })
        };

        chart.draw_series(bars(BAR_COLOR.filled()))?;
        chart.draw_series(bars(BLACK.stroke_width(2)))?;

        root.present()?;
        Ok(())
    }
}
