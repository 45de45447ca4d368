use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for lattice coordinates.
/// Each instance is inclusive of both corners.
/// Fields use it to map between world coordinates and their linear buffer.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for d in 0..GRID_DIMENSION {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}..={}", self.bounds[(d, 0)], self.bounds[(d, 1)])?;
        }
        write!(f, "]")
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create AABB from corners.
    pub fn from_mm(min: Coord<DIMENSION>, max: Coord<DIMENSION>) -> Self {
        let result = AABB {
            bounds: Bounds::from_columns(&[min, max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// Lattice anchored at the origin with `extents[d]` sites along axis `d`.
    pub fn from_extents(extents: [usize; DIMENSION]) -> Self {
        debug_assert!(extents.iter().all(|e| *e > 0));
        let max = Coord::from_fn(|d, _| extents[d] as i32 - 1);
        Self::from_mm(Coord::zeros(), max)
    }

    /// Number of sites along each axis,
    /// i.e. [0, 9] has an exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Like `coord_to_linear`, but `None` for coordinates outside.
    pub fn try_coord_to_linear(
        &self,
        coord: &Coord<DIMENSION>,
    ) -> Option<usize> {
        self.contains(coord).then(|| self.coord_to_linear(coord))
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        (0..DIMENSION).all(|d| {
            coord[d] >= self.bounds[(d, 0)] && coord[d] <= self.bounds[(d, 1)]
        })
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        (0..DIMENSION).all(|d| self.bounds[(d, 0)] <= self.bounds[(d, 1)])
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    #[allow(clippy::needless_lifetimes)]
    pub fn coord_iter<'a>(
        &'a self,
    ) -> impl Iterator<Item = Coord<DIMENSION>> + use<'a, DIMENSION> {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}
