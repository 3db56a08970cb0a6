use crate::colormap::{Colormap, Rgb};
use crate::contour::Levels;
use crate::triangulation::InterpolationMethod;

use geo::{Coord, Rect};

#[derive(Clone, Debug)]
pub struct ContourParameters {
    // interpolation grid, only used by the grid contour path
    pub grid_bounds: Rect,
    pub grid_points: (usize, usize),
    pub interpolation: InterpolationMethod,

    pub levels: Levels,
    pub colormap: Colormap,

    // line and marker styling
    pub line_color: Rgb,
    pub line_width: f32,
    pub marker_color: Rgb,
    pub marker_size: f32,

    pub axis_limits: Option<Rect>,
}

impl Default for ContourParameters {
    fn default() -> Self {
        Self {
            grid_bounds: Rect::new(Coord { x: -2.1, y: -2.1 }, Coord { x: 2.1, y: 2.1 }),
            grid_points: (100, 200),
            interpolation: InterpolationMethod::Linear,
            levels: Levels::Count(14),
            colormap: Colormap::rd_bu_r(),
            line_color: [0, 0, 0],
            line_width: 0.5,
            marker_color: [0, 0, 0],
            marker_size: 3.,
            axis_limits: Some(Rect::new(Coord { x: -2., y: -2. }, Coord { x: 2., y: 2. })),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FigureParameters {
    pub rows: usize,
    pub hspace: f64,

    // viewer window
    pub title: String,
    pub window_size: (f32, f32),
}

impl Default for FigureParameters {
    fn default() -> Self {
        Self {
            rows: 2,
            hspace: 0.5,
            title: String::from("ScatterContour"),
            window_size: (640., 960.),
        }
    }
}
