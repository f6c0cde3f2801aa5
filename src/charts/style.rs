//! Chart style settings: fonts, axis bounds and text.

use serde::{Deserialize, Serialize};

/// Font size and weight for one kind of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Styling and labelling for the grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub title: Option<String>,
    pub title_font: FontSpec,
    pub x_label: String,
    pub y_label: String,
    pub axis_label_font: FontSpec,
    pub tick_font: FontSpec,
    pub y_limits: (f64, f64),
    /// Fraction of a group's unit slot taken by its bars.
    pub total_width: f64,
    /// Horizontal padding on either side, as a fraction of the bar span.
    pub x_margin: f64,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: None,
            title_font: FontSpec::bold(12.0),
            x_label: "Ratio of noise samples".to_string(),
            y_label: "Accuracy".to_string(),
            axis_label_font: FontSpec::bold(13.0),
            tick_font: FontSpec::bold(12.0),
            y_limits: (0.5, 0.8),
            total_width: 0.8,
            x_margin: 0.05,
            window_title: "Accuracy by noise ratio".to_string(),
            window_size: [800.0, 600.0],
        }
    }
}
