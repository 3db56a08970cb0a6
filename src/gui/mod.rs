mod painter;

use eframe::egui::{self, pos2, Color32, Rect, Sense};
use scatter_contour::Figure;

pub struct ContourViewer {
    figure: Figure,
}

impl ContourViewer {
    pub fn new(figure: Figure) -> ContourViewer {
        ContourViewer { figure }
    }

    fn render_figure(&self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(area, Sense::hover());
        let painter = ui.painter_at(response.rect);

        for (row, outer) in row_rects(area, self.figure.subplots.len(), self.figure.hspace)
            .into_iter()
            .enumerate()
        {
            painter::paint_subplot(&painter, outer, &self.figure.subplots[row]);
        }
    }
}

impl eframe::App for ContourViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::WHITE))
            .show(ctx, |ui| self.render_figure(ui));
    }
}

// splits `area` into equally tall rows separated by `hspace` times a row height
fn row_rects(area: Rect, rows: usize, hspace: f64) -> Vec<Rect> {
    if rows == 0 {
        return vec![];
    }
    let hspace = hspace as f32;
    let row_height = area.height() / (rows as f32 + (rows - 1) as f32 * hspace);

    (0..rows)
        .map(|i| {
            let top = area.top() + i as f32 * row_height * (1. + hspace);
            Rect::from_min_max(pos2(area.left(), top), pos2(area.right(), top + row_height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_rects() {
        let area = Rect::from_min_max(pos2(0., 0.), pos2(100., 250.));
        let rows = row_rects(area, 2, 0.5);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].height(), 100.);
        assert_eq!(rows[1].top(), 150.);
        assert_eq!(rows[1].bottom(), 250.);
    }
}
