//! Chart Viewer Widget
//! Optional title above the plot area.

use crate::charts::{ChartPlotter, Figure};

pub struct ChartViewer {
    pub figure: Figure,
}

impl ChartViewer {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        if let Some(title) = &self.figure.title {
            ui.vertical_centered(|ui| {
                ui.label(ChartPlotter::styled(title, self.figure.style.title_font));
            });
            ui.add_space(4.0);
        }

        ChartPlotter::draw_figure(ui, &self.figure);
    }
}
