mod aabb;
pub mod indexing;
pub use aabb::*;

pub use nalgebra::{matrix, vector};

/// Integer lattice coordinate.
pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive per-axis `[min, max]` pairs, one row per axis.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
