use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    EframeError(#[from] eframe::Error),
    #[error("x, y and z must have equal lengths, got {x}, {y} and {z}")]
    LengthMismatch { x: usize, y: usize, z: usize },
    #[error("Sample {0} has a non-finite coordinate or value")]
    NonFiniteSample(usize),
    #[error("A triangulation needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("The points are collinear or coincident, no triangle can be formed")]
    DegenerateTriangulation,
    #[error("Unable to insert a point into the triangulation: {0:?}")]
    Insertion(spade::InsertionError),
    #[error("A grid needs at least 2 points per axis, got {nx}x{ny}")]
    GridTooSmall { nx: usize, ny: usize },
    #[error("A grid of {nx}x{ny} points exceeds the limit of {max} points per axis")]
    GridTooLarge { nx: usize, ny: usize, max: usize },
    #[error("The grid bounds must be finite and have a positive area")]
    InvalidBounds,
    #[error("Invalid contour levels: {0}")]
    InvalidLevels(&'static str),
    #[error("The field has no unmasked values to contour")]
    EmptyField,
    #[error("The figure has no subplot at index {0}")]
    SubplotOutOfRange(usize),
}
