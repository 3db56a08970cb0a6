pub mod grid;

pub use self::grid::{linspace, Grid};
