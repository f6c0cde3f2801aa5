//! Figure Application
//! Single-panel window that displays one composed figure.

use crate::charts::Figure;
use crate::gui::ChartViewer;
use egui::{FontId, TextStyle};

/// Main application window.
pub struct FigureApp {
    chart_viewer: ChartViewer,
}

impl FigureApp {
    pub fn new(cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        // Axis tick numbers are drawn with the small and body text styles
        let tick_size = figure.style.tick_font.size;
        cc.egui_ctx.style_mut(|style| {
            style
                .text_styles
                .insert(TextStyle::Small, FontId::proportional(tick_size));
            style
                .text_styles
                .insert(TextStyle::Body, FontId::proportional(tick_size));
        });
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            chart_viewer: ChartViewer::new(figure),
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
