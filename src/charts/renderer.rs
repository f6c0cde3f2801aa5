//! Chart Renderer
//! Lays out the grouped bars and issues the drawing calls on a `Figure`.
//!
//! Drawing order:
//! 1. One bar set per series, offset by one bar width each
//! 2. Group labels under the middle bar of every group
//! 3. Fixed y-axis limits, axis titles and legend

use crate::charts::{BarLayout, Figure, StyleConfig};
use crate::data::Series;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to display figure: {0}")]
    Display(String),
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Build the grouped bar figure. Lengths are not checked against each other.
    pub fn compose(series: &[Series], labels: &[String], style: &StyleConfig) -> Figure {
        let layout = BarLayout::new(labels.len(), series.len(), style.total_width);
        log::debug!(
            "Layout: {} groups x {} series, bar width {:.4}",
            layout.groups,
            layout.series,
            layout.width()
        );

        let mut fig = Figure::new(style.clone());
        let width = layout.width();

        for (i, s) in series.iter().enumerate() {
            fig.bar(&layout.series_offsets(i), &s.values, width, &s.label);
        }

        fig.xticks(&layout.tick_positions(), labels);
        if let Some(title) = &style.title {
            fig.title(title);
        }
        fig.xlabel(&style.x_label);
        fig.ylabel(&style.y_label);

        let (lo, hi) = style.y_limits;
        fig.ylim(lo, hi);
        fig.legend();

        fig
    }

    /// Compose the figure and show it, blocking until the window is closed.
    pub fn render(
        series: &[Series],
        labels: &[String],
        style: &StyleConfig,
    ) -> Result<(), RenderError> {
        let fig = Self::compose(series, labels, style);
        match serde_json::to_string(&fig) {
            Ok(json) => log::debug!("Composed figure: {}", json),
            Err(e) => log::warn!("Could not serialize figure for logging: {}", e),
        }
        fig.show()
    }
}
