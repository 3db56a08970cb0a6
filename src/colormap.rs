// ColorBrewer RdBu, from dark red through white to dark blue
const RD_BU: [[u8; 3]; 11] = [
    [0x67, 0x00, 0x1f],
    [0xb2, 0x18, 0x2b],
    [0xd6, 0x60, 0x4d],
    [0xf4, 0xa5, 0x82],
    [0xfd, 0xdb, 0xc7],
    [0xf7, 0xf7, 0xf7],
    [0xd1, 0xe5, 0xf0],
    [0x92, 0xc5, 0xde],
    [0x43, 0x93, 0xc3],
    [0x21, 0x66, 0xac],
    [0x05, 0x30, 0x61],
];

/// RGB colour
pub type Rgb = [u8; 3];

/// Piecewise linear colour map over evenly spaced anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    anchors: &'static [Rgb],
    reversed: bool,
}

impl Colormap {
    pub fn rd_bu() -> Colormap {
        Colormap {
            anchors: &RD_BU,
            reversed: false,
        }
    }

    /// blue for low values, red for high
    pub fn rd_bu_r() -> Colormap {
        Colormap {
            anchors: &RD_BU,
            reversed: true,
        }
    }

    pub fn reversed(self) -> Colormap {
        Colormap {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Colour at `t`, clamped to [0, 1]. NaN maps to the low end.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        let t = if self.reversed { 1. - t } else { t };

        let last = self.anchors.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;

        let (a, b) = (self.anchors[i], self.anchors[i + 1]);
        [0, 1, 2].map(|c| (a[c] as f64 + frac * (b[c] as f64 - a[c] as f64)).round() as u8)
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::rd_bu_r()
    }
}

/// Colour legend of a filled contour plot, `colors[i]` fills `levels[i]..levels[i + 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub levels: Vec<f64>,
    pub colors: Vec<Rgb>,
}

impl ColorScale {
    /// Colours each band by its midpoint normalised over the outer midpoints
    pub fn new(levels: &[f64], colormap: &Colormap) -> ColorScale {
        let midpoints: Vec<f64> = levels.windows(2).map(|w| (w[0] + w[1]) / 2.).collect();

        let colors = match (midpoints.first(), midpoints.last()) {
            (Some(&lo), Some(&hi)) if hi > lo => midpoints
                .iter()
                .map(|m| colormap.sample((m - lo) / (hi - lo)))
                .collect(),
            _ => midpoints.iter().map(|_| colormap.sample(0.5)).collect(),
        };

        ColorScale {
            levels: levels.to_vec(),
            colors,
        }
    }

    pub fn num_bands(&self) -> usize {
        self.colors.len()
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        Some((*self.levels.first()?, *self.levels.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends() {
        let cmap = Colormap::rd_bu_r();

        assert_eq!(cmap.sample(0.), RD_BU[10]);
        assert_eq!(cmap.sample(1.), RD_BU[0]);
        assert_eq!(cmap.sample(0.5), RD_BU[5]);
        assert_eq!(cmap.sample(-4.), cmap.sample(0.));
        assert_eq!(cmap.sample(f64::NAN), cmap.sample(0.));
        assert_eq!(cmap.reversed(), Colormap::rd_bu());
    }

    #[test]
    fn test_interpolates_between_anchors() {
        let cmap = Colormap::rd_bu();
        let c = cmap.sample(0.05);

        for i in 0..3 {
            let (a, b) = (RD_BU[0][i] as i32, RD_BU[1][i] as i32);
            assert!((c[i] as i32 - (a + b) / 2).abs() <= 1);
        }
    }

    #[test]
    fn test_color_scale() {
        let scale = ColorScale::new(&[0., 1., 2., 3.], &Colormap::rd_bu_r());

        assert_eq!(scale.num_bands(), 3);
        assert_eq!(scale.colors[0], RD_BU[10]);
        assert_eq!(scale.colors[2], RD_BU[0]);
        assert_eq!(scale.range(), Some((0., 3.)));

        let single = ColorScale::new(&[0., 1.], &Colormap::rd_bu_r());
        assert_eq!(single.colors, vec![RD_BU[5]]);
    }
}
