//! Chart Plotter Module
//! Draws a composed `Figure` with egui_plot.

use crate::charts::{Figure, FontSpec, Tick};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Plot, PlotBounds};

/// Bar colours, cycled per bar set.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

/// Tolerance when matching a grid mark back to its tick label.
const TICK_EPS: f64 = 1e-6;

pub struct ChartPlotter;

impl ChartPlotter {
    pub fn bar_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Text styled with the given font spec.
    pub fn styled(text: &str, font: FontSpec) -> RichText {
        let rich = RichText::new(text).size(font.size);
        if font.bold {
            rich.strong()
        } else {
            rich
        }
    }

    /// Label shown for a grid mark at `value`, empty when no tick sits there.
    pub fn tick_label(ticks: &[Tick], value: f64) -> String {
        ticks
            .iter()
            .find(|t| (t.position - value).abs() < TICK_EPS)
            .map(|t| t.label.clone())
            .unwrap_or_default()
    }

    /// Draw the bar chart, filling the available space.
    pub fn draw_figure(ui: &mut egui::Ui, fig: &Figure) {
        let style = &fig.style;
        let (x_min, x_max) = fig.x_bounds();
        let (y_min, y_max) = fig.y_bounds();

        let ticks: Vec<f64> = fig.x_ticks.iter().map(|t| t.position).collect();
        let labels = fig.x_ticks.clone();

        let mut plot = Plot::new("figure")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid([false, true]);

        if !ticks.is_empty() {
            // Only the requested positions get x marks
            plot = plot
                .x_grid_spacer(move |_input| {
                    ticks
                        .iter()
                        .map(|&value| GridMark {
                            value,
                            step_size: 1.0,
                        })
                        .collect()
                })
                .x_axis_formatter(move |mark, _range| Self::tick_label(&labels, mark.value));
        }

        if let Some(text) = &fig.x_label {
            plot = plot.x_axis_label(Self::styled(text, style.axis_label_font));
        }
        if let Some(text) = &fig.y_label {
            plot = plot.y_axis_label(Self::styled(text, style.axis_label_font));
        }
        if fig.legend {
            plot = plot.legend(Legend::default().position(Corner::RightTop));
        }

        plot.show(ui, |plot_ui| {
            for (i, set) in fig.bar_sets.iter().enumerate() {
                let color = Self::bar_color(i);
                let bars: Vec<Bar> = set
                    .bars
                    .iter()
                    .map(|&[x, h]| Bar::new(x, h).width(set.width).fill(color))
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .width(set.width)
                        .color(color)
                        .name(&set.label),
                );
            }

            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::StyleConfig;

    #[test]
    fn tick_label_matches_nearby_marks_only() {
        let mut fig = Figure::new(StyleConfig::default());
        fig.xticks(&[0.0, 1.0], &["μ=0.2".to_string(), "μ=0.4".to_string()]);
        assert_eq!(ChartPlotter::tick_label(&fig.x_ticks, 1.0 + 1e-9), "μ=0.4");
        assert_eq!(ChartPlotter::tick_label(&fig.x_ticks, 0.5), "");
    }

    #[test]
    fn colours_cycle() {
        assert_eq!(ChartPlotter::bar_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::bar_color(PALETTE.len() + 2), PALETTE[2]);
        assert_ne!(ChartPlotter::bar_color(0), ChartPlotter::bar_color(1));
    }
}
