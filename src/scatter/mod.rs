pub mod synthetic;

pub use self::synthetic::{gaussian_dipole, synthetic_scatter, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED};

use crate::{Error, Result};

use geo::{Coord, Rect};
use spade::{HasPosition, Point2};

/// A scalar field value `z` sampled at the planar position `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64) -> Sample {
        Sample { x, y, z }
    }

    pub fn coord(&self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl HasPosition for Sample {
    type Scalar = f64;

    fn position(&self) -> Point2<Self::Scalar> {
        Point2::new(self.x, self.y)
    }
}

/// Irregularly spaced samples of a scalar field.
///
/// The order is kept as given and duplicate positions are allowed,
/// the triangulation decides which of the duplicates survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSet {
    samples: Vec<Sample>,
}

impl ScatterSet {
    pub fn new(samples: Vec<Sample>) -> Result<ScatterSet> {
        if let Some(i) = samples.iter().position(|s| !s.is_finite()) {
            return Err(Error::NonFiniteSample(i));
        }
        Ok(ScatterSet { samples })
    }

    /// Zips three coordinate arrays into a scatter set
    pub fn from_xyz(x: &[f64], y: &[f64], z: &[f64]) -> Result<ScatterSet> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }

        ScatterSet::new(
            x.iter()
                .zip(y)
                .zip(z)
                .map(|((&x, &y), &z)| Sample { x, y, z })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    pub fn zs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.z).collect()
    }

    pub fn coords(&self) -> Vec<Coord> {
        self.samples.iter().map(Sample::coord).collect()
    }

    pub fn z_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        Some(
            self.samples
                .iter()
                .fold((first.z, first.z), |(lo, hi), s| (lo.min(s.z), hi.max(s.z))),
        )
    }

    /// Axis aligned bounding box of the sample positions
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.samples.first()?.coord();
        let (min, max) = self.samples.iter().fold((first, first), |(min, max), s| {
            (
                Coord {
                    x: min.x.min(s.x),
                    y: min.y.min(s.y),
                },
                Coord {
                    x: max.x.max(s.x),
                    y: max.y.max(s.y),
                },
            )
        });
        Some(Rect::new(min, max))
    }
}

impl<'a> IntoIterator for &'a ScatterSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xyz() {
        let scatter = ScatterSet::from_xyz(&[0., 1., 0.], &[0., 0., 1.], &[0., 1., 1.]).unwrap();

        assert_eq!(scatter.len(), 3);
        assert_eq!(scatter.samples()[1], Sample::new(1., 0., 1.));
        assert_eq!(scatter.xs(), vec![0., 1., 0.]);
        assert_eq!(scatter.z_range(), Some((0., 1.)));
    }

    #[test]
    fn test_length_mismatch() {
        let result = ScatterSet::from_xyz(&[0., 1., 0.], &[0., 0.], &[0., 1., 1.]);

        assert!(matches!(
            result,
            Err(Error::LengthMismatch { x: 3, y: 2, z: 3 })
        ));
    }

    #[test]
    fn test_non_finite() {
        let result = ScatterSet::from_xyz(&[0., 1., 0.], &[0., f64::NAN, 1.], &[0., 1., 1.]);

        assert!(matches!(result, Err(Error::NonFiniteSample(1))));
    }

    #[test]
    fn test_bounds() {
        let scatter =
            ScatterSet::from_xyz(&[-1., 2., 0.5], &[3., -0.5, 1.], &[0., 0., 0.]).unwrap();
        let bounds = scatter.bounds().unwrap();

        assert_eq!(bounds.min(), Coord { x: -1., y: -0.5 });
        assert_eq!(bounds.max(), Coord { x: 2., y: 3. });

        assert!(ScatterSet::default().bounds().is_none());
        assert!(ScatterSet::default().z_range().is_none());
    }
}
