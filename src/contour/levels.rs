use crate::{Error, Result};

// multiples of a power of ten that make readable contour intervals
const NICE_STEPS: [f64; 5] = [1., 2., 2.5, 5., 10.];

// slack when snapping values to a step to absorb rounding errors
const STEP_TOLERANCE: f64 = 1e-9;

/// How the contour levels of a plot are chosen
#[derive(Debug, Clone, PartialEq)]
pub enum Levels {
    /// roughly this many levels at round values covering the data
    Count(usize),
    /// exactly these, strictly increasing
    Values(Vec<f64>),
}

impl Default for Levels {
    fn default() -> Self {
        Levels::Count(14)
    }
}

impl Levels {
    pub fn resolve(&self, min: f64, max: f64) -> Result<Vec<f64>> {
        match self {
            Levels::Count(0) => Err(Error::InvalidLevels("level count must be positive")),
            Levels::Count(n) => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(Error::InvalidLevels("data range must be finite and ordered"));
                }
                if !(max - min).is_finite() {
                    return Err(Error::InvalidLevels("data range is too wide to pick levels"));
                }
                Ok(nice_levels(min, max, n + 1))
            }
            Levels::Values(values) => {
                if values.is_empty() {
                    return Err(Error::InvalidLevels("at least one level is needed"));
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(Error::InvalidLevels("levels must be finite"));
                }
                if values.windows(2).any(|w| w[1] <= w[0]) {
                    return Err(Error::InvalidLevels("levels must be strictly increasing"));
                }
                Ok(values.clone())
            }
        }
    }
}

/// Round levels spanning `[min, max]` with at most `max_intervals` intervals.
///
/// The step is the smallest of 1, 2, 2.5, 5 or 10 times a power of ten that fits,
/// the first level is at or below `min` and the last at or above `max`.
/// A flat range is widened by one in both directions.
pub fn nice_levels(min: f64, max: f64, max_intervals: usize) -> Vec<f64> {
    let max_intervals = max_intervals.max(1);
    let (min, max) = if max - min <= f64::EPSILON * max.abs().max(min.abs()).max(1.) {
        (min - 1., max + 1.)
    } else {
        (min, max)
    };

    let raw_step = (max - min) / max_intervals as f64;
    let scale = 10_f64.powf(raw_step.log10().floor());

    for decade in [scale, 10. * scale] {
        for step in NICE_STEPS.iter().map(|s| s * decade) {
            if step < raw_step * (1. - STEP_TOLERANCE) {
                continue;
            }
            let low = (min / step + STEP_TOLERANCE).floor() * step;
            let intervals = ((max - low) / step - STEP_TOLERANCE).ceil().max(1.) as usize;

            if intervals <= max_intervals {
                return (0..=intervals)
                    .map(|i| snap_zero(low + i as f64 * step, step))
                    .collect();
            }
        }
    }

    // only reachable for a single interval that straddles a step boundary
    vec![min, max]
}

#[inline]
fn snap_zero(value: f64, step: f64) -> f64 {
    if value.abs() < step * STEP_TOLERANCE {
        0.
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_levels(levels: &[f64], expected: &[f64]) {
        assert_eq!(levels.len(), expected.len(), "{levels:?} != {expected:?}");
        for (l, e) in levels.iter().zip(expected) {
            assert!((l - e).abs() < 1e-12, "{levels:?} != {expected:?}");
        }
    }

    #[test]
    fn test_unit_range() {
        let levels = Levels::Count(14).resolve(0., 1.).unwrap();

        let expected: Vec<f64> = (0..=10).map(|i| i as f64 / 10.).collect();
        assert_levels(&levels, &expected);
    }

    #[test]
    fn test_covers_range() {
        let (min, max) = (-0.4216, 0.4233);
        let levels = Levels::Count(14).resolve(min, max).unwrap();

        assert!(levels[0] <= min);
        assert!(*levels.last().unwrap() >= max);
        assert!(levels.len() - 1 <= 15);
        assert!(levels.contains(&0.));

        let step = levels[1] - levels[0];
        for w in levels.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_flat_field() {
        let levels = nice_levels(3., 3., 4);

        assert!(levels[0] <= 2.);
        assert!(*levels.last().unwrap() >= 4.);
    }

    #[test]
    fn test_invalid() {
        assert!(Levels::Count(0).resolve(0., 1.).is_err());
        assert!(Levels::Count(3).resolve(f64::NAN, 1.).is_err());
        assert!(Levels::Count(14).resolve(-1e308, 1e308).is_err());
        assert!(Levels::Values(vec![]).resolve(0., 1.).is_err());
        assert!(Levels::Values(vec![0., 0.]).resolve(0., 1.).is_err());
        assert!(Levels::Values(vec![0., f64::INFINITY]).resolve(0., 1.).is_err());
        assert_levels(
            &Levels::Values(vec![-1., 0.5, 2.]).resolve(0., 1.).unwrap(),
            &[-1., 0.5, 2.],
        );
    }
}
