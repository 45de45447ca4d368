use crate::util::*;

/// Scalar density per lattice site.
///
/// Velocity boundaries never read it; it exists so that density-driven
/// boundary policies and velocity-driven ones can share an update call.
#[derive(Clone, Debug)]
pub struct DensityField<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f64>,
}

impl<const GRID_DIMENSION: usize> DensityField<GRID_DIMENSION> {
    pub fn new(aabb: AABB<GRID_DIMENSION>, value: f64) -> Self {
        DensityField {
            aabb,
            buffer: vec![value; aabb.buffer_size()],
        }
    }

    pub fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    #[track_caller]
    pub fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64 {
        debug_assert!(self.aabb.contains(world_coord));
        self.buffer[self.aabb.coord_to_linear(world_coord)]
    }

    #[track_caller]
    pub fn set(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64) {
        debug_assert!(self.aabb.contains(world_coord));
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index] = value;
    }
}
