use super::*;
use crate::util::*;

/// Velocity field over a buffer owned by someone else,
/// typically the lattice of the surrounding simulation.
pub struct VelocitySlice<'a, const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: &'a mut [f64],
}

impl<'a, const GRID_DIMENSION: usize> VelocitySlice<'a, GRID_DIMENSION> {
    pub fn new(aabb: AABB<GRID_DIMENSION>, buffer: &'a mut [f64]) -> Self {
        debug_assert!(buffer.len() >= aabb.buffer_size() * GRID_DIMENSION);
        VelocitySlice { aabb, buffer }
    }
}

impl<const GRID_DIMENSION: usize> VelocityView<GRID_DIMENSION>
    for VelocitySlice<'_, GRID_DIMENSION>
{
    fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer[0..self.aabb.buffer_size() * GRID_DIMENSION]
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        let range = 0..self.aabb.buffer_size() * GRID_DIMENSION;
        &mut self.buffer[range]
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]) {
        let range = 0..self.aabb.buffer_size() * GRID_DIMENSION;
        (&self.aabb, &mut self.buffer[range])
    }
}
