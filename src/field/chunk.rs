use crate::util::*;

/// A contiguous piece of an interleaved velocity buffer,
/// handed out to one task by `VelocityView::par_modify_access`.
pub struct FieldChunk<'a, const GRID_DIMENSION: usize> {
    offset: usize,
    aabb: &'a AABB<GRID_DIMENSION>,
    buffer: &'a mut [f64],
}

impl<'a, const GRID_DIMENSION: usize> FieldChunk<'a, GRID_DIMENSION> {
    pub fn new(
        offset: usize,
        aabb: &'a AABB<GRID_DIMENSION>,
        buffer: &'a mut [f64],
    ) -> Self {
        FieldChunk {
            offset,
            aabb,
            buffer,
        }
    }

    /// Iterate `(world_coord, component, value)` for each buffer entry.
    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<GRID_DIMENSION>, usize, &mut f64)> {
        let offset = self.offset;
        let aabb = self.aabb;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut f64)| {
                let linear_index = offset + i;
                let coord =
                    aabb.linear_to_coord(linear_index / GRID_DIMENSION);
                (coord, linear_index % GRID_DIMENSION, v)
            })
    }
}
