//! Contour plots of irregularly spaced scatter data.
//!
//! Two ways of getting from scattered `(x, y, z)` samples to contours:
//! [`contour_by_interpolation`] linearly interpolates the delaunay triangulation
//! of the samples onto a regular grid and contours the grid, while
//! [`contour_by_triangulation`] contours the triangulation itself.
//! Both draw onto a [`Subplot`] of a [`Figure`].

pub mod colormap;
pub mod contour;
pub mod error;
pub mod figure;
pub mod parameters;
pub mod plot;
pub mod raster;
pub mod scatter;
pub mod triangulation;

pub use error::{Error, Result};
pub use figure::{Figure, Subplot};
pub use parameters::{ContourParameters, FigureParameters};
pub use plot::{contour_by_interpolation, contour_by_triangulation};
pub use scatter::{synthetic_scatter, Sample, ScatterSet};
pub use triangulation::{InterpolationMethod, Triangulation};

// interpolation time grows with the node count, anything above this is unusably slow
pub const MAX_GRID_AXIS_POINTS: usize = 10_000;
