use crate::colormap::Rgb;
use crate::contour::{ContourSet, FilledContourSet};

use geo::{Coord, Rect};

/// One drawn primitive group of a subplot, painted in insertion order
#[derive(Debug, Clone)]
pub enum Layer {
    FilledContours(FilledContourLayer),
    ContourLines(ContourLineLayer),
    Markers(MarkerLayer),
}

impl Layer {
    pub fn is_empty(&self) -> bool {
        match self {
            Layer::FilledContours(l) => l.contours.is_empty(),
            Layer::ContourLines(l) => l.contours.is_empty(),
            Layer::Markers(l) => l.points.is_empty(),
        }
    }

    /// bounding box of every coordinate in the layer
    pub fn extent(&self) -> Option<Rect> {
        let coords: Box<dyn Iterator<Item = Coord> + '_> = match self {
            Layer::FilledContours(l) => Box::new(
                l.contours
                    .0
                    .iter()
                    .flat_map(|b| b.polygons.iter())
                    .flat_map(|p| p.exterior().coords().copied()),
            ),
            Layer::ContourLines(l) => Box::new(
                l.contours
                    .0
                    .iter()
                    .flat_map(|c| c.lines.iter())
                    .flat_map(|line| line.coords().copied()),
            ),
            Layer::Markers(l) => Box::new(l.points.iter().copied()),
        };

        coords.fold(None, |rect: Option<Rect>, c| match rect {
            None => Some(Rect::new(c, c)),
            Some(r) => Some(Rect::new(
                Coord {
                    x: r.min().x.min(c.x),
                    y: r.min().y.min(c.y),
                },
                Coord {
                    x: r.max().x.max(c.x),
                    y: r.max().y.max(c.y),
                },
            )),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FilledContourLayer {
    pub contours: FilledContourSet,
    /// fill colour of every band, same order as the bands
    pub colors: Vec<Rgb>,
}

#[derive(Debug, Clone)]
pub struct ContourLineLayer {
    pub contours: ContourSet,
    pub color: Rgb,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct MarkerLayer {
    pub points: Vec<Coord>,
    pub color: Rgb,
    /// diameter in screen pixels
    pub size: f32,
}
