//! Lattice fields touched by boundary updates.
//!
//! A velocity field stores `GRID_DIMENSION` components per lattice site,
//! interleaved after the spatial axes, so the component axis is the
//! trailing one. Fields are addressed in world coordinates; the `AABB`
//! of a field translates them to buffer offsets.
//!
//! Fields may own their buffer (`VelocityField`) or borrow one that
//! belongs to the surrounding simulation (`VelocitySlice`).

mod chunk;
mod density;
mod owned;
mod slice;
mod writer;

pub use chunk::*;
pub use density::*;
pub use owned::*;
pub use slice::*;
pub use writer::*;

use crate::util::indexing::*;
use crate::util::*;
use rayon::prelude::*;

pub trait VelocityView<const GRID_DIMENSION: usize>: Sync {
    fn aabb(&self) -> &AABB<GRID_DIMENSION>;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]);

    /// Length of the trailing component axis.
    fn components(&self) -> usize {
        GRID_DIMENSION
    }

    #[track_caller]
    fn view(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        component: usize,
    ) -> f64 {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let site = self.aabb().coord_to_linear(world_coord);
        self.buffer()[component_index(site, component, GRID_DIMENSION)]
    }

    /// Checked read, `None` outside the field.
    fn try_view(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        component: usize,
    ) -> Option<f64> {
        if component >= GRID_DIMENSION {
            return None;
        }
        let site = self.aabb().try_coord_to_linear(world_coord)?;
        Some(self.buffer()[component_index(site, component, GRID_DIMENSION)])
    }

    #[track_caller]
    fn set(
        &mut self,
        world_coord: &Coord<GRID_DIMENSION>,
        component: usize,
        value: f64,
    ) {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let site = self.aabb().coord_to_linear(world_coord);
        self.buffer_mut()[component_index(site, component, GRID_DIMENSION)] =
            value;
    }

    /// Overwrite every component of one site.
    #[track_caller]
    fn set_site(
        &mut self,
        world_coord: &Coord<GRID_DIMENSION>,
        values: &[f64],
    ) {
        debug_assert_eq!(values.len(), GRID_DIMENSION);
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let start = self.aabb().coord_to_linear(world_coord) * GRID_DIMENSION;
        self.buffer_mut()[start..start + GRID_DIMENSION]
            .copy_from_slice(values);
    }

    /// Split the buffer into `chunk_size` pieces for parallel modification.
    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = FieldChunk<'a, GRID_DIMENSION>> {
        let (aabb, buffer) = self.aabb_buffer_mut();
        par_modify_access_impl(buffer, aabb, chunk_size)
    }

    /// Set every `(site, component)` entry from `f`.
    fn par_set_values<
        F: Fn(Coord<GRID_DIMENSION>, usize) -> f64 + Send + Sync,
    >(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size).for_each(
            |mut d: FieldChunk<'_, GRID_DIMENSION>| {
                d.coord_iter_mut().for_each(
                    |(world_coord, component, value_mut)| {
                        *value_mut = f(world_coord, component);
                    },
                )
            },
        );
    }

    /// Handle for concurrent writes to distinct sites.
    fn writer(&mut self) -> FieldWriter<'_, GRID_DIMENSION> {
        let (aabb, buffer) = self.aabb_buffer_mut();
        FieldWriter::new(*aabb, buffer)
    }
}

/// Borrow the aabb and the buffer together before building the iterator,
/// the borrow checker can't split them inside the trait method.
fn par_modify_access_impl<'a, const GRID_DIMENSION: usize>(
    buffer: &'a mut [f64],
    aabb: &'a AABB<GRID_DIMENSION>,
    chunk_size: usize,
) -> impl ParallelIterator<Item = FieldChunk<'a, GRID_DIMENSION>> + 'a {
    let len = aabb.buffer_size() * GRID_DIMENSION;
    buffer[0..len]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            FieldChunk::new(offset, aabb, buffer_chunk)
        })
}

/// Exact comparison of two fields, including their extents.
pub fn bit_identical<
    const GRID_DIMENSION: usize,
    A: VelocityView<GRID_DIMENSION>,
    B: VelocityView<GRID_DIMENSION>,
>(
    a: &A,
    b: &B,
) -> bool {
    a.aabb() == b.aabb()
        && a.buffer().len() == b.buffer().len()
        && a
            .buffer()
            .iter()
            .zip(b.buffer())
            .all(|(x, y)| x.to_bits() == y.to_bits())
}
