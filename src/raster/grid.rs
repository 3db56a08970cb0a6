use crate::contour::TriMesh;
use crate::triangulation::{InterpolationMethod, Triangulation};
use crate::{Error, Result, MAX_GRID_AXIS_POINTS};

use geo::{Coord, Rect};
use std::ops::{Index, IndexMut};

/// `n` evenly spaced values from `start` to `stop`, both included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// A scalar field on a regular lattice.
///
/// Row `yi` lies at `ys[yi]` and column `xi` at `xs[xi]`, both increasing.
/// Nodes without a value are masked with NaN.
#[derive(Clone, Debug)]
pub struct Grid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub field: Vec<f64>,
}

impl Grid {
    pub fn new(bounds: Rect, nx: usize, ny: usize) -> Result<Grid> {
        if nx < 2 || ny < 2 {
            return Err(Error::GridTooSmall { nx, ny });
        }
        if nx > MAX_GRID_AXIS_POINTS || ny > MAX_GRID_AXIS_POINTS {
            return Err(Error::GridTooLarge {
                nx,
                ny,
                max: MAX_GRID_AXIS_POINTS,
            });
        }

        let (min, max) = (bounds.min(), bounds.max());
        if ![min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite())
            || bounds.width() <= 0.
            || bounds.height() <= 0.
        {
            return Err(Error::InvalidBounds);
        }

        Ok(Grid {
            xs: linspace(min.x, max.x, nx),
            ys: linspace(min.y, max.y, ny),
            field: vec![f64::NAN; nx * ny],
        })
    }

    pub fn width(&self) -> usize {
        self.xs.len()
    }

    pub fn height(&self) -> usize {
        self.ys.len()
    }

    pub fn num_points(&self) -> usize {
        self.field.len()
    }

    pub fn num_masked(&self) -> usize {
        self.field.iter().filter(|v| v.is_nan()).count()
    }

    #[inline]
    pub fn index2coord(&self, xi: usize, yi: usize) -> Coord {
        Coord {
            x: self.xs[xi],
            y: self.ys[yi],
        }
    }

    /// Samples the triangulated field at every node, nodes outside the hull stay masked
    pub fn interpolate(
        mut self,
        triangulation: &Triangulation,
        method: InterpolationMethod,
    ) -> Grid {
        for yi in 0..self.height() {
            for xi in 0..self.width() {
                let coords = self.index2coord(xi, yi);
                self[(yi, xi)] = triangulation
                    .interpolate(coords, method)
                    .unwrap_or(f64::NAN);
            }
        }

        log::debug!(
            "Interpolated a {}x{} grid, {} of {} nodes outside the convex hull",
            self.width(),
            self.height(),
            self.num_masked(),
            self.num_points()
        );
        self
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.field
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
            })
    }

    /// Splits every fully unmasked cell into four triangles around its centre.
    ///
    /// The centre takes the mean of the corners, which also decides the
    /// ambiguous saddle cells. Cells touching a masked node are left out.
    pub fn to_mesh(&self) -> TriMesh {
        let (width, height) = (self.width(), self.height());
        let cells = (width - 1) * (height - 1);
        let mut mesh = TriMesh::with_capacity(self.num_points() + cells, 4 * cells);

        // grid nodes keep their field index as vertex index
        for yi in 0..height {
            for xi in 0..width {
                mesh.push_vertex(self.index2coord(xi, yi), self[(yi, xi)]);
            }
        }

        let mut skipped = 0;
        for yi in 0..height - 1 {
            for xi in 0..width - 1 {
                // counter-clockwise from the bottom left corner
                let corners = [
                    yi * width + xi,
                    yi * width + xi + 1,
                    (yi + 1) * width + xi + 1,
                    (yi + 1) * width + xi,
                ];
                if corners.iter().any(|&i| self.field[i].is_nan()) {
                    skipped += 1;
                    continue;
                }

                let centre = Coord {
                    x: (self.xs[xi] + self.xs[xi + 1]) / 2.,
                    y: (self.ys[yi] + self.ys[yi + 1]) / 2.,
                };
                let value = corners.iter().map(|&i| self.field[i]).sum::<f64>() / 4.;
                let c = mesh.push_vertex(centre, value);

                for e in 0..4 {
                    mesh.push_triangle([corners[e], corners[(e + 1) % 4], c]);
                }
            }
        }

        if skipped == cells {
            log::warn!("Every grid cell touches a masked node, nothing to contour");
        }
        mesh
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.field[index.0 * self.xs.len() + index.1]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let width = self.xs.len();
        &mut self.field[index.0 * width + index.1]
    }
}
