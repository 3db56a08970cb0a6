pub mod contour_set;
pub mod isobands;
pub mod isolines;
pub mod levels;
pub mod mesh;

pub use self::contour_set::{ContourBand, ContourLevel, ContourSet, FilledContourSet};
pub use self::isobands::isobands;
pub use self::isolines::isolines;
pub use self::levels::{nice_levels, Levels};
pub use self::mesh::TriMesh;
