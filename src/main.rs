//! Mask Accuracy Chart - grouped bar chart of accuracy per noise-mask ratio
//!
//! Shows accuracy for three mask ratios across three noise-sample ratios.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use charts::{ChartRenderer, StyleConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data = data::mask_accuracy_dataset();
    let style = StyleConfig::default();
    log::info!(
        "Rendering {} series over {} groups",
        data.series.len(),
        data.groups.len()
    );

    ChartRenderer::render(&data.series, data.groups.as_slice(), &style)
        .context("Failed to render accuracy chart")
}
