use super::{Sample, ScatterSet};

pub const DEFAULT_SEED: u64 = 19680801;
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

// samples are drawn from [-SAMPLE_EXTENT, SAMPLE_EXTENT) on both axes
pub const SAMPLE_EXTENT: f64 = 2.;

/// The demo field, a positive and a negative lobe on either side of the y-axis
pub fn gaussian_dipole(x: f64, y: f64) -> f64 {
    x * (-x * x - y * y).exp()
}

/// Reproducible random scatter of `gaussian_dipole`.
///
/// All x values are drawn before the y values, so growing `count`
/// changes every y value while the leading x values stay put.
pub fn synthetic_scatter(seed: u64, count: usize) -> ScatterSet {
    let mut rng = fastrand::Rng::with_seed(seed);

    let xs: Vec<f64> = (0..count).map(|_| uniform(&mut rng)).collect();
    let ys: Vec<f64> = (0..count).map(|_| uniform(&mut rng)).collect();

    let samples = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Sample::new(x, y, gaussian_dipole(x, y)))
        .collect();

    // every sample is finite by construction
    ScatterSet { samples }
}

fn uniform(rng: &mut fastrand::Rng) -> f64 {
    SAMPLE_EXTENT * (2. * rng.f64() - 1.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let a = synthetic_scatter(DEFAULT_SEED, DEFAULT_SAMPLE_COUNT);
        let b = synthetic_scatter(DEFAULT_SEED, DEFAULT_SAMPLE_COUNT);

        assert_eq!(a.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(a.xs(), b.xs());
        assert_eq!(a.ys(), b.ys());
        assert_eq!(a.zs(), b.zs());
    }

    #[test]
    fn test_seed_changes_dataset() {
        let a = synthetic_scatter(DEFAULT_SEED, 20);
        let b = synthetic_scatter(DEFAULT_SEED + 1, 20);

        assert_ne!(a.xs(), b.xs());
    }

    #[test]
    fn test_samples_in_extent() {
        let scatter = synthetic_scatter(DEFAULT_SEED, DEFAULT_SAMPLE_COUNT);

        for s in scatter.iter() {
            assert!((-SAMPLE_EXTENT..SAMPLE_EXTENT).contains(&s.x));
            assert!((-SAMPLE_EXTENT..SAMPLE_EXTENT).contains(&s.y));
            assert_eq!(s.z, gaussian_dipole(s.x, s.y));
        }
    }

    #[test]
    fn test_gaussian_dipole() {
        assert_eq!(gaussian_dipole(0., 1.), 0.);
        assert!(gaussian_dipole(0.5, 0.) > 0.);
        assert!((gaussian_dipole(-0.5, 0.3) + gaussian_dipole(0.5, 0.3)).abs() < 1e-15);
        // extremum at x = 1/sqrt(2)
        let peak = gaussian_dipole(std::f64::consts::FRAC_1_SQRT_2, 0.);
        assert!(peak > gaussian_dipole(0.6, 0.) && peak > gaussian_dipole(0.8, 0.));
    }
}
