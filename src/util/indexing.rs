//! Row-major indexing over lattice extents.
//! The last spatial axis moves fastest, field components are interleaved
//! after it.

use crate::util::*;

pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    exclusive_bound.iter().map(|d| *d as usize).product()
}

pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0 && coord[d] < exclusive_bounds[d]);
        accumulator =
            accumulator * exclusive_bounds[d] as usize + coord[d] as usize;
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zeros();
    let mut remaining = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (remaining % extent) as i32;
        remaining /= extent;
    }
    result
}

/// Offset of one component of one site in an interleaved buffer.
#[inline]
pub fn component_index(
    site_linear_index: usize,
    component: usize,
    components: usize,
) -> usize {
    debug_assert!(component < components);
    site_linear_index * components + component
}
