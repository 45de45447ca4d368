use crate::util::*;

/// A lattice site carrying an imposed velocity.
/// Identity is by coordinate value.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoundaryPoint<const GRID_DIMENSION: usize> {
    coords: Coord<GRID_DIMENSION>,
}

impl<const GRID_DIMENSION: usize> BoundaryPoint<GRID_DIMENSION> {
    pub fn new(coords: [i32; GRID_DIMENSION]) -> Self {
        BoundaryPoint {
            coords: Coord::from_column_slice(&coords),
        }
    }

    pub fn from_coord(coords: Coord<GRID_DIMENSION>) -> Self {
        BoundaryPoint { coords }
    }

    #[inline]
    pub fn coords(&self) -> &Coord<GRID_DIMENSION> {
        &self.coords
    }

    #[inline]
    pub fn coord(&self, axis: usize) -> i32 {
        self.coords[axis]
    }
}

impl<const GRID_DIMENSION: usize> From<[i32; GRID_DIMENSION]>
    for BoundaryPoint<GRID_DIMENSION>
{
    fn from(coords: [i32; GRID_DIMENSION]) -> Self {
        Self::new(coords)
    }
}

impl<const GRID_DIMENSION: usize> std::fmt::Display
    for BoundaryPoint<GRID_DIMENSION>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in 0..GRID_DIMENSION {
            if d > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.coords[d])?;
        }
        Ok(())
    }
}

/// Sites spanning the inclusive box `min..=max`, in linear order.
/// Handy for inlet columns and outlet planes.
pub fn points_in_box<const GRID_DIMENSION: usize>(
    min: [i32; GRID_DIMENSION],
    max: [i32; GRID_DIMENSION],
) -> Vec<BoundaryPoint<GRID_DIMENSION>> {
    let aabb = AABB::from_mm(
        Coord::from_column_slice(&min),
        Coord::from_column_slice(&max),
    );
    aabb.coord_iter().map(BoundaryPoint::from_coord).collect()
}
