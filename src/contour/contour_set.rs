use super::{isobands, isolines, TriMesh};

use geo::{MultiLineString, MultiPolygon};

/// Contour lines grouped by level
#[derive(Debug, Clone, Default)]
pub struct ContourSet(pub Vec<ContourLevel>);

impl ContourSet {
    pub fn with_capacity(num_levels: usize) -> ContourSet {
        ContourSet(Vec::with_capacity(num_levels))
    }

    /// Isolines at the levels inside the value range of the mesh.
    ///
    /// Levels outside the range cannot produce a line; if all of them are
    /// outside, the one closest to the range is kept.
    pub fn lines(mesh: &TriMesh, levels: &[f64]) -> ContourSet {
        let Some((min, max)) = mesh.value_range() else {
            return ContourSet::default();
        };

        let mut inside: Vec<f64> = levels
            .iter()
            .copied()
            .filter(|l| (min..=max).contains(l))
            .collect();

        if inside.is_empty() {
            let distance = |l: f64| (l - min).abs().min((l - max).abs());
            if let Some(closest) = levels
                .iter()
                .copied()
                .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
            {
                inside.push(closest);
            }
        }

        let mut contours = ContourSet::with_capacity(inside.len());
        for z in inside {
            contours.0.push(ContourLevel::new(isolines(mesh, z), z));
        }
        contours
    }

    pub fn levels(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.z).collect()
    }

    pub fn num_lines(&self) -> usize {
        self.0.iter().map(|c| c.lines.0.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_lines() == 0
    }
}

#[derive(Debug, Clone)]
pub struct ContourLevel {
    pub lines: MultiLineString,
    pub z: f64,
}

impl ContourLevel {
    pub fn new(lines: MultiLineString, z: f64) -> ContourLevel {
        ContourLevel { lines, z }
    }
}

/// Filled regions between every pair of consecutive levels.
///
/// Bands are open at the bottom and closed at the top, except the lowest
/// which is closed at both ends.
///
/// Bands the mesh does not reach are kept empty so the band index
/// always matches the colour scale.
#[derive(Debug, Clone, Default)]
pub struct FilledContourSet(pub Vec<ContourBand>);

impl FilledContourSet {
    pub fn filled(mesh: &TriMesh, levels: &[f64]) -> FilledContourSet {
        FilledContourSet(
            levels
                .windows(2)
                .enumerate()
                .map(|(i, w)| ContourBand::new(isobands(mesh, w[0], w[1], i == 0), w[0], w[1]))
                .collect(),
        )
    }

    pub fn num_polygons(&self) -> usize {
        self.0.iter().map(|b| b.polygons.0.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_polygons() == 0
    }
}

#[derive(Debug, Clone)]
pub struct ContourBand {
    pub polygons: MultiPolygon,
    pub lower: f64,
    pub upper: f64,
}

impl ContourBand {
    pub fn new(polygons: MultiPolygon, lower: f64, upper: f64) -> ContourBand {
        ContourBand {
            polygons,
            lower,
            upper,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Coord};

    fn triangle() -> TriMesh {
        let mut mesh = TriMesh::default();
        let a = mesh.push_vertex(Coord { x: 0., y: 0. }, 0.);
        let b = mesh.push_vertex(Coord { x: 1., y: 0. }, 1.);
        let c = mesh.push_vertex(Coord { x: 0., y: 1. }, 1.);
        mesh.push_triangle([a, b, c]);
        mesh
    }

    #[test]
    fn test_lines_drop_levels_outside_range() {
        let contours = ContourSet::lines(&triangle(), &[-0.5, 0.25, 0.5, 1.5]);

        assert_eq!(contours.levels(), vec![0.25, 0.5]);
        assert_eq!(contours.num_lines(), 2);
    }

    #[test]
    fn test_lines_keep_closest_level() {
        let contours = ContourSet::lines(&triangle(), &[-3., 1.2, 4.]);

        assert_eq!(contours.levels(), vec![1.2]);
        assert!(contours.is_empty());
    }

    #[test]
    fn test_filled_band_count() {
        let levels = [0., 0.5, 1.];
        let filled = FilledContourSet::filled(&triangle(), &levels);

        assert_eq!(filled.0.len(), 2);
        let area: f64 = filled.0.iter().map(|b| b.polygons.unsigned_area()).sum();
        assert!((area - 0.5).abs() < 1e-12);
        assert_eq!(filled.0[1].midpoint(), 0.75);
    }

    #[test]
    fn test_flat_field_fills_one_band() {
        let mut mesh = TriMesh::default();
        let a = mesh.push_vertex(Coord { x: 0., y: 0. }, 1.);
        let b = mesh.push_vertex(Coord { x: 1., y: 0. }, 1.);
        let c = mesh.push_vertex(Coord { x: 0., y: 1. }, 1.);
        mesh.push_triangle([a, b, c]);

        let filled = FilledContourSet::filled(&mesh, &[0.8, 1., 1.2]);
        let non_empty: Vec<_> = filled.0.iter().filter(|b| !b.polygons.0.is_empty()).collect();
        assert_eq!(non_empty.len(), 1);
        assert_eq!(non_empty[0].upper, 1.);

        // a flat field on the lowest level stays in the lowest band
        let filled = FilledContourSet::filled(&mesh, &[1., 1.2, 1.4]);
        assert_eq!(filled.0[0].polygons.0.len(), 1);
        assert!(filled.0[1].polygons.0.is_empty());
    }
}
