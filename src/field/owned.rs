use super::*;
use crate::util::*;

/// Velocity field that owns its buffer.
#[derive(Clone, Debug)]
pub struct VelocityField<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f64>,
}

impl<const GRID_DIMENSION: usize> VelocityField<GRID_DIMENSION> {
    /// Zero-initialized field covering `aabb`.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Self {
        debug_assert!(aabb.check_validity());
        let buffer = vec![0.0; aabb.buffer_size() * GRID_DIMENSION];
        VelocityField { aabb, buffer }
    }

    pub fn from_extents(extents: [usize; GRID_DIMENSION]) -> Self {
        Self::new(AABB::from_extents(extents))
    }

    pub fn as_slice_field(&mut self) -> VelocitySlice<'_, GRID_DIMENSION> {
        VelocitySlice::new(self.aabb, &mut self.buffer)
    }
}

impl<const GRID_DIMENSION: usize> VelocityView<GRID_DIMENSION>
    for VelocityField<GRID_DIMENSION>
{
    fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]) {
        (&self.aabb, &mut self.buffer)
    }
}
