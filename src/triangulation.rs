use crate::contour::TriMesh;
use crate::scatter::{Sample, ScatterSet};
use crate::{Error, Result};

use geo::{Coord, LineString, Polygon};
use spade::{DelaunayTriangulation, FloatTriangulation, Point2, Triangulation as _};

/// How values between the samples are estimated
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// barycentric weights of the enclosing delaunay triangle
    #[default]
    Linear,
    /// sibson's natural neighbor weights, smooth except at the samples
    NaturalNeighbor,
}

/// Delaunay triangulation of a scatter set
pub struct Triangulation {
    dt: DelaunayTriangulation<Sample>,
}

impl Triangulation {
    pub fn new(scatter: &ScatterSet) -> Result<Triangulation> {
        if scatter.len() < 3 {
            return Err(Error::TooFewPoints(scatter.len()));
        }

        let dt = DelaunayTriangulation::<Sample>::bulk_load_stable(scatter.samples().to_vec())
            .map_err(Error::Insertion)?;

        // all points on a line, or all on top of each other
        if dt.num_inner_faces() == 0 {
            return Err(Error::DegenerateTriangulation);
        }

        log::debug!(
            "Triangulated {} samples into {} vertices and {} triangles",
            scatter.len(),
            dt.num_vertices(),
            dt.num_inner_faces()
        );

        Ok(Triangulation { dt })
    }

    /// duplicate sample positions collapse into one vertex
    pub fn num_vertices(&self) -> usize {
        self.dt.num_vertices()
    }

    pub fn num_triangles(&self) -> usize {
        self.dt.num_inner_faces()
    }

    /// The field value at `coord`, None outside the convex hull
    pub fn interpolate(&self, coord: Coord, method: InterpolationMethod) -> Option<f64> {
        let position = Point2::new(coord.x, coord.y);
        match method {
            InterpolationMethod::Linear => self
                .dt
                .barycentric()
                .interpolate(|v| v.data().z, position),
            InterpolationMethod::NaturalNeighbor => self
                .dt
                .natural_neighbor()
                .interpolate(|v| v.data().z, position),
        }
    }

    pub fn convex_hull(&self) -> Polygon {
        let hull: Vec<Coord> = self
            .dt
            .convex_hull()
            .map(|edge| {
                let p = edge.from().position();
                Coord { x: p.x, y: p.y }
            })
            .collect();

        Polygon::new(LineString::new(hull), vec![])
    }

    /// The triangles with the sample values on their corners
    pub fn to_mesh(&self) -> TriMesh {
        let mut mesh = TriMesh::with_capacity(self.dt.num_vertices(), self.dt.num_inner_faces());

        // fixed vertex handles are dense indices, in the same order as vertices()
        for vertex in self.dt.vertices() {
            let p = vertex.position();
            mesh.push_vertex(Coord { x: p.x, y: p.y }, vertex.data().z);
        }
        for face in self.dt.inner_faces() {
            mesh.push_triangle(face.vertices().map(|v| v.fix().index()));
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::{synthetic_scatter, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED};
    use geo::Area;

    fn single_triangle() -> ScatterSet {
        ScatterSet::from_xyz(&[0., 1., 0.], &[0., 0., 1.], &[0., 1., 1.]).unwrap()
    }

    #[test]
    fn test_single_triangle() {
        let tri = Triangulation::new(&single_triangle()).unwrap();

        assert_eq!(tri.num_vertices(), 3);
        assert_eq!(tri.num_triangles(), 1);
        assert!((tri.convex_hull().unsigned_area() - 0.5).abs() < 1e-12);

        let mesh = tri.to_mesh();
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.value_range(), Some((0., 1.)));
    }

    #[test]
    fn test_linear_interpolation() {
        let tri = Triangulation::new(&single_triangle()).unwrap();

        // the plane through the samples is z = x + y
        for (x, y) in [(0.2, 0.2), (0.5, 0.1), (0.1, 0.7)] {
            let z = tri
                .interpolate(Coord { x, y }, InterpolationMethod::Linear)
                .unwrap();
            assert!((z - (x + y)).abs() < 1e-12);
        }

        assert!(tri
            .interpolate(Coord { x: 1., y: 1. }, InterpolationMethod::Linear)
            .is_none());
        assert!(tri
            .interpolate(Coord { x: -0.1, y: 0.5 }, InterpolationMethod::NaturalNeighbor)
            .is_none());
    }

    #[test]
    fn test_natural_neighbor_reproduces_samples() {
        let scatter = synthetic_scatter(DEFAULT_SEED, DEFAULT_SAMPLE_COUNT);
        let tri = Triangulation::new(&scatter).unwrap();

        for s in scatter.iter().take(20) {
            let z = tri
                .interpolate(s.coord(), InterpolationMethod::NaturalNeighbor)
                .unwrap();
            assert!((z - s.z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_too_few_points() {
        let scatter = ScatterSet::from_xyz(&[0., 1.], &[0., 0.], &[0., 1.]).unwrap();

        assert!(matches!(
            Triangulation::new(&scatter),
            Err(Error::TooFewPoints(2))
        ));
        assert!(matches!(
            Triangulation::new(&ScatterSet::default()),
            Err(Error::TooFewPoints(0))
        ));
    }

    #[test]
    fn test_collinear_points() {
        let scatter =
            ScatterSet::from_xyz(&[0., 1., 2., 3.], &[0., 1., 2., 3.], &[0., 1., 2., 3.]).unwrap();

        assert!(matches!(
            Triangulation::new(&scatter),
            Err(Error::DegenerateTriangulation)
        ));
    }

    #[test]
    fn test_duplicate_points() {
        let scatter = ScatterSet::from_xyz(
            &[0., 1., 0., 1.],
            &[0., 0., 1., 0.],
            &[0., 1., 1., 1.],
        )
        .unwrap();

        let tri = Triangulation::new(&scatter).unwrap();
        assert_eq!(tri.num_triangles(), 1);
    }
}
