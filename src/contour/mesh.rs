use geo::Coord;

/// Triangles over a set of vertices carrying a scalar value each.
///
/// Both contouring paths end up here, the delaunay triangulation directly
/// and the regular grid by splitting every unmasked cell.
/// Triangles are counter-clockwise.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub vertices: Vec<Coord>,
    pub values: Vec<f64>,
    pub triangles: Vec<[usize; 3]>,
}

impl TriMesh {
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> TriMesh {
        TriMesh {
            vertices: Vec::with_capacity(num_vertices),
            values: Vec::with_capacity(num_vertices),
            triangles: Vec::with_capacity(num_triangles),
        }
    }

    pub fn push_vertex(&mut self, coord: Coord, value: f64) -> usize {
        self.vertices.push(coord);
        self.values.push(value);
        self.vertices.len() - 1
    }

    pub fn push_triangle(&mut self, triangle: [usize; 3]) {
        self.triangles.push(triangle);
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// min and max over the vertices used by some triangle
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.triangles
            .iter()
            .flatten()
            .map(|&i| self.values[i])
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
            })
    }

    #[inline]
    pub(super) fn corner(&self, i: usize) -> (Coord, f64) {
        (self.vertices[i], self.values[i])
    }

    #[inline]
    pub(super) fn is_finite_triangle(&self, triangle: &[usize; 3]) -> bool {
        triangle.iter().all(|&i| self.values[i].is_finite())
    }
}

/// the point on the segment a-b where the linear field crosses `level`
#[inline]
pub(super) fn vertex_interpolate(a: (Coord, f64), b: (Coord, f64), level: f64) -> Coord {
    let t = (level - a.1) / (b.1 - a.1);
    Coord {
        x: a.0.x + t * (b.0.x - a.0.x),
        y: a.0.y + t * (b.0.y - a.0.y),
    }
}
