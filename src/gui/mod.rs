//! GUI module - Window hosting a single figure

mod app;
mod chart_viewer;

pub use app::FigureApp;
pub use chart_viewer::ChartViewer;

use crate::charts::{Figure, RenderError};
use eframe::egui;

/// Open a native window showing `figure`; returns once the window is closed.
pub fn run_figure_window(figure: Figure) -> Result<(), RenderError> {
    let title = figure.style.window_title.clone();
    let [width, height] = figure.style.window_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureApp::new(cc, figure)))),
    )
    .map_err(|e| RenderError::Display(e.to_string()))
}
