use super::mesh::{vertex_interpolate, TriMesh};

use geo::{Coord, LineString, MultiPolygon, Polygon};

/// The part of the mesh where `lower < value <= upper`, or
/// `lower <= value <= upper` when `include_lower` is set.
///
/// Every triangle is clipped on its own, so the result is a set of small
/// convex polygons tiling the band rather than one merged outline.
/// Consecutive half-open bands never cover the same triangle twice, even
/// where the field sits exactly on a level.
pub fn isobands(mesh: &TriMesh, lower: f64, upper: f64, include_lower: bool) -> MultiPolygon {
    let above_lower = |z: f64| if include_lower { z >= lower } else { z > lower };
    let mut polygons = Vec::new();

    for triangle in mesh.triangles.iter() {
        if !mesh.is_finite_triangle(triangle) {
            continue;
        }
        let corners = triangle.map(|i| mesh.corner(i));

        let (lo, hi) = corners
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), c| (lo.min(c.1), hi.max(c.1)));
        if !above_lower(hi) || lo > upper {
            continue;
        }

        let ring = if above_lower(lo) && hi <= upper {
            corners.iter().map(|c| c.0).collect()
        } else {
            let clipped = clip(&corners, above_lower, lower);
            let clipped = clip(&clipped, |z| z <= upper, upper);
            let mut ring: Vec<Coord> = clipped.into_iter().map(|c| c.0).collect();
            ring.dedup();
            if ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            ring
        };

        if ring.len() < 3 || shoelace(&ring).abs() <= f64::EPSILON * shoelace_of(&corners).abs() {
            continue;
        }
        polygons.push(Polygon::new(LineString::new(ring), vec![]));
    }

    MultiPolygon::new(polygons)
}

// Sutherland-Hodgman against a level of the field instead of a line
fn clip(polygon: &[(Coord, f64)], inside: impl Fn(f64) -> bool, level: f64) -> Vec<(Coord, f64)> {
    let mut out = Vec::with_capacity(polygon.len() + 1);

    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let (current_in, next_in) = (inside(current.1), inside(next.1));

        if current_in {
            out.push(current);
        }
        if current_in != next_in {
            out.push((vertex_interpolate(current, next, level), level));
        }
    }
    out
}

// twice the signed area
fn shoelace(ring: &[Coord]) -> f64 {
    (0..ring.len())
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn shoelace_of(corners: &[(Coord, f64)]) -> f64 {
    shoelace(&corners.iter().map(|c| c.0).collect::<Vec<_>>())
}
