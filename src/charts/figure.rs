//! Figure Module
//! Explicit figure context. Drawing calls record onto a `Figure`, and
//! `show` hands it to the window and releases it once the window closes.

use crate::charts::{RenderError, StyleConfig};
use serde::Serialize;

/// One legend entry worth of bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSet {
    pub label: String,
    pub bars: Vec<[f64; 2]>,
    pub width: f64,
}

impl BarSet {
    #[allow(dead_code)]
    pub fn positions(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b[0]).collect()
    }

    #[allow(dead_code)]
    pub fn heights(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b[1]).collect()
    }
}

/// A labelled x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Composed chart, ready to be shown.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub style: StyleConfig,
    pub title: Option<String>,
    pub bar_sets: Vec<BarSet>,
    pub x_ticks: Vec<Tick>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y_limits: Option<(f64, f64)>,
    pub legend: bool,
}

impl Figure {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            title: None,
            bar_sets: Vec::new(),
            x_ticks: Vec::new(),
            x_label: None,
            y_label: None,
            y_limits: None,
            legend: false,
        }
    }

    /// Add a set of bars. Positions and heights are paired up to the shorter of the two.
    pub fn bar(&mut self, positions: &[f64], heights: &[f64], width: f64, label: &str) {
        let bars = positions
            .iter()
            .zip(heights)
            .map(|(&x, &h)| [x, h])
            .collect();
        self.bar_sets.push(BarSet {
            label: label.to_string(),
            bars,
            width,
        });
    }

    /// Replace the x ticks. Positions and labels are paired up to the shorter of the two.
    pub fn xticks(&mut self, positions: &[f64], labels: &[String]) {
        self.x_ticks = positions
            .iter()
            .zip(labels)
            .map(|(&position, label)| Tick {
                position,
                label: label.clone(),
            })
            .collect();
    }

    pub fn ylim(&mut self, lo: f64, hi: f64) {
        self.y_limits = Some((lo, hi));
    }

    pub fn xlabel(&mut self, text: &str) {
        self.x_label = Some(text.to_string());
    }

    pub fn ylabel(&mut self, text: &str) {
        self.y_label = Some(text.to_string());
    }

    pub fn title(&mut self, text: &str) {
        self.title = Some(text.to_string());
    }

    pub fn legend(&mut self) {
        self.legend = true;
    }

    /// Horizontal extent of all bars plus the style's margin.
    pub fn x_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for set in &self.bar_sets {
            for bar in &set.bars {
                lo = lo.min(bar[0] - set.width / 2.0);
                hi = hi.max(bar[0] + set.width / 2.0);
            }
        }
        if lo > hi {
            return (-0.5, 0.5);
        }
        let pad = (hi - lo) * self.style.x_margin;
        (lo - pad, hi + pad)
    }

    /// Vertical extent: the fixed limits if set, otherwise zero up to the tallest bar.
    pub fn y_bounds(&self) -> (f64, f64) {
        if let Some(limits) = self.y_limits {
            return limits;
        }
        let top = self
            .bar_sets
            .iter()
            .flat_map(|s| s.bars.iter().map(|b| b[1]))
            .fold(0.0_f64, f64::max);
        (0.0, if top > 0.0 { top * 1.05 } else { 1.0 })
    }

    /// Open a window with the figure and block until it is closed.
    pub fn show(self) -> Result<(), RenderError> {
        log::info!(
            "Showing figure with {} bar sets and {} ticks",
            self.bar_sets.len(),
            self.x_ticks.len()
        );
        crate::gui::run_figure_window(self)?;
        log::info!("Figure window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_pairs_positions_with_heights() {
        let mut fig = Figure::new(StyleConfig::default());
        fig.bar(&[0.0, 1.0], &[0.5, 0.7], 0.25, "s");
        assert_eq!(fig.bar_sets.len(), 1);
        assert_eq!(fig.bar_sets[0].bars, vec![[0.0, 0.5], [1.0, 0.7]]);
        assert_eq!(fig.bar_sets[0].width, 0.25);
    }

    #[test]
    fn mismatched_lengths_drop_extras() {
        let mut fig = Figure::new(StyleConfig::default());
        fig.bar(&[0.0, 1.0, 2.0], &[0.5], 0.25, "short");
        assert_eq!(fig.bar_sets[0].positions(), vec![0.0]);

        fig.xticks(&[0.0], &["a".to_string(), "b".to_string()]);
        assert_eq!(fig.x_ticks.len(), 1);
        assert_eq!(fig.x_ticks[0].label, "a");
    }

    #[test]
    fn x_bounds_pad_outer_bars() {
        let mut style = StyleConfig::default();
        style.x_margin = 0.0;
        let mut fig = Figure::new(style);
        fig.bar(&[0.0, 2.0], &[1.0, 1.0], 0.5, "s");
        assert_eq!(fig.x_bounds(), (-0.25, 2.25));
    }

    #[test]
    fn empty_figure_has_default_bounds() {
        let fig = Figure::new(StyleConfig::default());
        assert_eq!(fig.x_bounds(), (-0.5, 0.5));
        assert_eq!(fig.y_bounds(), (0.0, 1.0));
    }

    #[test]
    fn ylim_overrides_auto_bounds() {
        let mut fig = Figure::new(StyleConfig::default());
        fig.bar(&[0.0], &[2.0], 0.5, "s");
        assert!((fig.y_bounds().1 - 2.1).abs() < 1e-12);
        fig.ylim(0.5, 0.8);
        assert_eq!(fig.y_bounds(), (0.5, 0.8));
    }
}
