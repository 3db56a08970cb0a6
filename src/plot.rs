use crate::colormap::ColorScale;
use crate::contour::{ContourSet, FilledContourSet, TriMesh};
use crate::figure::{ContourLineLayer, FilledContourLayer, Layer, MarkerLayer, Subplot};
use crate::parameters::ContourParameters;
use crate::raster::Grid;
use crate::scatter::ScatterSet;
use crate::triangulation::Triangulation;
use crate::{Error, Result};

/// Contours the scatter set by first interpolating it onto a regular grid.
///
/// The grid spans `params.grid_bounds` with `params.grid_points` nodes, nodes
/// outside the convex hull of the samples are masked. Interpolation cost grows
/// with the number of nodes, the per-axis count is capped by `MAX_GRID_AXIS_POINTS`.
/// On error the subplot is left as it was.
pub fn contour_by_interpolation<'a>(
    subplot: &'a mut Subplot,
    scatter: &ScatterSet,
    params: &ContourParameters,
) -> Result<&'a mut Subplot> {
    let triangulation = Triangulation::new(scatter)?;

    let (nx, ny) = params.grid_points;
    let grid =
        Grid::new(params.grid_bounds, nx, ny)?.interpolate(&triangulation, params.interpolation);

    let (min, max) = grid.value_range().ok_or(Error::EmptyField)?;
    let levels = params.levels.resolve(min, max)?;

    let title = format!(
        "grid and contour ({} points, {} grid points)",
        scatter.len(),
        grid.num_points()
    );

    draw_contours(subplot, &grid.to_mesh(), &levels, scatter, params, title)
}

/// Contours the delaunay triangulation of the scatter set directly.
///
/// Nothing is drawn outside the convex hull of the samples.
/// On error the subplot is left as it was.
pub fn contour_by_triangulation<'a>(
    subplot: &'a mut Subplot,
    scatter: &ScatterSet,
    params: &ContourParameters,
) -> Result<&'a mut Subplot> {
    let mesh = Triangulation::new(scatter)?.to_mesh();

    let (min, max) = mesh.value_range().ok_or(Error::EmptyField)?;
    let levels = params.levels.resolve(min, max)?;

    let title = format!("tricontour ({} points)", scatter.len());

    draw_contours(subplot, &mesh, &levels, scatter, params, title)
}

// filled bands, lines on top, then the samples
fn draw_contours<'a>(
    subplot: &'a mut Subplot,
    mesh: &TriMesh,
    levels: &[f64],
    scatter: &ScatterSet,
    params: &ContourParameters,
    title: String,
) -> Result<&'a mut Subplot> {
    let lines = ContourSet::lines(mesh, levels);
    let filled = FilledContourSet::filled(mesh, levels);
    let scale = ColorScale::new(levels, &params.colormap);

    log::debug!(
        "{}: {} levels, {} lines and {} filled polygons",
        title,
        levels.len(),
        lines.num_lines(),
        filled.num_polygons()
    );

    subplot.add_layer(Layer::FilledContours(FilledContourLayer {
        contours: filled,
        colors: scale.colors.clone(),
    }));
    subplot.add_layer(Layer::ContourLines(ContourLineLayer {
        contours: lines,
        color: params.line_color,
        width: params.line_width,
    }));
    subplot.add_layer(Layer::Markers(MarkerLayer {
        points: scatter.coords(),
        color: params.marker_color,
        size: params.marker_size,
    }));

    subplot.colorbar(scale);
    if let Some(limits) = params.axis_limits {
        subplot.set_limits(limits);
    }
    subplot.set_title(title);

    Ok(subplot)
}
