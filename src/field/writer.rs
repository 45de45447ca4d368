use crate::util::*;
use std::marker::PhantomData;
use sync_ptr::SyncMutPtr;

/// Shared write access to a velocity buffer for concurrent tasks.
///
/// The writer itself performs no synchronization. It is only sound when
/// no two tasks write the same site, which `VelocityBoundary` guarantees
/// by rejecting duplicate and overlapping sites at attach time.
pub struct FieldWriter<'a, const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    len: usize,
    ptr: SyncMutPtr<f64>,
    _buffer: PhantomData<&'a mut [f64]>,
}

impl<'a, const GRID_DIMENSION: usize> FieldWriter<'a, GRID_DIMENSION> {
    pub fn new(aabb: AABB<GRID_DIMENSION>, buffer: &'a mut [f64]) -> Self {
        let len = aabb.buffer_size() * GRID_DIMENSION;
        assert!(buffer.len() >= len);
        let ptr = unsafe { SyncMutPtr::new(buffer.as_mut_ptr()) };
        FieldWriter {
            aabb,
            len,
            ptr,
            _buffer: PhantomData,
        }
    }

    pub fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    /// Write all components of the site at `world_coord`.
    ///
    /// # Safety
    /// No other task may write `world_coord` while the writer is alive.
    #[inline]
    pub unsafe fn write_site(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        values: &[f64; GRID_DIMENSION],
    ) {
        assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let start = self.aabb.coord_to_linear(world_coord) * GRID_DIMENSION;
        debug_assert!(start + GRID_DIMENSION <= self.len);
        let site_ptr = self.ptr.inner().add(start);
        for (component, value) in values.iter().enumerate() {
            *site_ptr.add(component) = *value;
        }
    }
}
