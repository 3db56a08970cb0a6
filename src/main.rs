mod gui;

use gui::ContourViewer;

use eframe::egui;
use scatter_contour::{
    contour_by_interpolation, contour_by_triangulation,
    scatter::{DEFAULT_SAMPLE_COUNT, DEFAULT_SEED},
    synthetic_scatter, ContourParameters, Figure, FigureParameters,
};

fn main() -> scatter_contour::Result<()> {
    let figure_params = FigureParameters::default();
    let contour_params = ContourParameters::default();

    let scatter = synthetic_scatter(DEFAULT_SEED, DEFAULT_SAMPLE_COUNT);
    log::info!(
        "Generated {} samples with seed {}",
        scatter.len(),
        DEFAULT_SEED
    );

    let mut figure = Figure::with_rows(figure_params.rows);
    contour_by_interpolation(figure.subplot_mut(0)?, &scatter, &contour_params)?;
    contour_by_triangulation(figure.subplot_mut(1)?, &scatter, &contour_params)?;
    figure.subplots_adjust(figure_params.hspace);

    let (width, height) = figure_params.window_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder {
            inner_size: Some(egui::vec2(width, height)),
            min_inner_size: Some(egui::vec2(400., 600.)),
            ..Default::default()
        },
        ..Default::default()
    };

    eframe::run_native(
        &figure_params.title,
        options,
        Box::new(|_cc| Ok(Box::new(ContourViewer::new(figure)))),
    )?;
    Ok(())
}
