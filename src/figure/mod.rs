pub mod layer;

pub use self::layer::{ContourLineLayer, FilledContourLayer, Layer, MarkerLayer};

use crate::colormap::ColorScale;
use crate::{Error, Result};

use geo::Rect;

// spacing before any adjustment
const DEFAULT_HSPACE: f64 = 0.2;

/// Subplots stacked top to bottom
#[derive(Debug, Clone)]
pub struct Figure {
    pub subplots: Vec<Subplot>,
    /// vertical gap between subplots as a fraction of the subplot height
    pub hspace: f64,
}

impl Figure {
    pub fn with_rows(rows: usize) -> Figure {
        Figure {
            subplots: vec![Subplot::default(); rows],
            hspace: DEFAULT_HSPACE,
        }
    }

    pub fn subplot_mut(&mut self, index: usize) -> Result<&mut Subplot> {
        self.subplots
            .get_mut(index)
            .ok_or(Error::SubplotOutOfRange(index))
    }

    pub fn subplots_adjust(&mut self, hspace: f64) {
        self.hspace = hspace.max(0.);
    }
}

/// One drawing surface, mutated only by appending
#[derive(Debug, Clone, Default)]
pub struct Subplot {
    pub title: Option<String>,
    /// visible data region, None fits the layers
    pub limits: Option<Rect>,
    pub layers: Vec<Layer>,
    pub color_scale: Option<ColorScale>,
}

impl Subplot {
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_limits(&mut self, limits: Rect) {
        self.limits = Some(limits);
    }

    pub fn colorbar(&mut self, scale: ColorScale) {
        self.color_scale = Some(scale);
    }

    /// true while nothing visible has been drawn
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Layer::is_empty)
    }

    /// The explicit limits, or the union of the layer extents
    pub fn view(&self) -> Option<Rect> {
        if self.limits.is_some() {
            return self.limits;
        }
        self.layers
            .iter()
            .filter_map(Layer::extent)
            .reduce(|a, b| {
                Rect::new(
                    geo::Coord {
                        x: a.min().x.min(b.min().x),
                        y: a.min().y.min(b.min().y),
                    },
                    geo::Coord {
                        x: a.max().x.max(b.max().x),
                        y: a.max().y.max(b.max().y),
                    },
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    #[test]
    fn test_subplot_out_of_range() {
        let mut figure = Figure::with_rows(2);

        assert!(figure.subplot_mut(1).is_ok());
        assert!(matches!(
            figure.subplot_mut(2),
            Err(Error::SubplotOutOfRange(2))
        ));
    }

    #[test]
    fn test_view_fits_layers() {
        let mut subplot = Subplot::default();
        assert!(subplot.is_empty());
        assert!(subplot.view().is_none());

        subplot.add_layer(Layer::Markers(MarkerLayer {
            points: vec![Coord { x: -1., y: 2. }, Coord { x: 3., y: 0.5 }],
            color: [0, 0, 0],
            size: 3.,
        }));
        assert!(!subplot.is_empty());

        let view = subplot.view().unwrap();
        assert_eq!(view.min(), Coord { x: -1., y: 0.5 });
        assert_eq!(view.max(), Coord { x: 3., y: 2. });

        let limits = Rect::new(Coord { x: -2., y: -2. }, Coord { x: 2., y: 2. });
        subplot.set_limits(limits);
        assert_eq!(subplot.view(), Some(limits));
    }

    #[test]
    fn test_negative_spacing_is_clamped() {
        let mut figure = Figure::with_rows(1);
        figure.subplots_adjust(-1.);

        assert_eq!(figure.hspace, 0.);
    }
}
