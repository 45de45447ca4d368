use crate::boundary::BoundaryPoint;
use crate::error::{BoundaryClass, BoundaryError};
use crate::util::*;
use std::collections::HashSet;

/// Boundary sites of one class, each listed once.
///
/// Only `SiteSet::new` builds one, so every task a strategy spawns over
/// a set writes a cell no other task writes.
#[derive(Clone, Debug)]
pub struct SiteSet<const GRID_DIMENSION: usize> {
    class: BoundaryClass,
    sites: Vec<BoundaryPoint<GRID_DIMENSION>>,
}

impl<const GRID_DIMENSION: usize> SiteSet<GRID_DIMENSION> {
    /// Takes ownership of `sites`, rejecting repeated coordinates.
    pub fn new(
        class: BoundaryClass,
        sites: Vec<BoundaryPoint<GRID_DIMENSION>>,
    ) -> Result<Self, BoundaryError> {
        let mut seen = HashSet::with_capacity(sites.len());
        for site in &sites {
            if !seen.insert(*site) {
                return Err(BoundaryError::DuplicateSite {
                    class,
                    coords: site.to_string(),
                });
            }
        }
        Ok(SiteSet { class, sites })
    }

    pub fn empty(class: BoundaryClass) -> Self {
        SiteSet {
            class,
            sites: Vec::new(),
        }
    }

    pub fn class(&self) -> BoundaryClass {
        self.class
    }

    pub fn as_slice(&self) -> &[BoundaryPoint<GRID_DIMENSION>] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// First site of `self` that is also in `other`.
    pub fn first_shared<'a>(
        &'a self,
        other: &'a SiteSet<GRID_DIMENSION>,
    ) -> Option<&'a BoundaryPoint<GRID_DIMENSION>> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let lookup: HashSet<_> = small.sites.iter().collect();
        large.sites.iter().find(|p| lookup.contains(p))
    }

    /// Check every site against a field's extents.
    pub fn place(
        &self,
        aabb: &AABB<GRID_DIMENSION>,
    ) -> Result<PlacedSites<'_, GRID_DIMENSION>, BoundaryError> {
        match self.sites.iter().find(|p| !aabb.contains(p.coords())) {
            Some(outside) => Err(BoundaryError::OutOfRange {
                class: self.class,
                coords: outside.to_string(),
                bounds: aabb.to_string(),
            }),
            None => Ok(PlacedSites { sites: self, aabb: *aabb }),
        }
    }
}

/// A `SiteSet` known to lie inside one field extent.
/// Strategies only accept sites in this form.
#[derive(Copy, Clone, Debug)]
pub struct PlacedSites<'a, const GRID_DIMENSION: usize> {
    sites: &'a SiteSet<GRID_DIMENSION>,
    aabb: AABB<GRID_DIMENSION>,
}

impl<'a, const GRID_DIMENSION: usize> PlacedSites<'a, GRID_DIMENSION> {
    pub fn as_slice(&self) -> &'a [BoundaryPoint<GRID_DIMENSION>] {
        self.sites.as_slice()
    }

    pub fn class(&self) -> BoundaryClass {
        self.sites.class()
    }

    pub fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Panics unless `field_aabb` is the extent the sites were placed in.
    #[track_caller]
    pub fn assert_fits(&self, field_aabb: &AABB<GRID_DIMENSION>) {
        assert_eq!(
            &self.aabb, field_aabb,
            "{} sites were placed in {}, field covers {}",
            self.class(),
            self.aabb,
            field_aabb
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::boundary::points_in_box;

    #[test]
    fn duplicate_rejected_test() {
        let err = SiteSet::new(
            BoundaryClass::Inlet,
            vec![BoundaryPoint::new([2]), BoundaryPoint::new([2])],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "inlet site (2) is listed more than once");
    }

    #[test]
    fn first_shared_test() {
        let a =
            SiteSet::new(BoundaryClass::Inlet, points_in_box([0, 0], [0, 3]))
                .unwrap();
        let b = SiteSet::new(
            BoundaryClass::Outlet,
            vec![BoundaryPoint::new([5, 5]), BoundaryPoint::new([0, 2])],
        )
        .unwrap();
        assert_eq!(a.first_shared(&b), Some(&BoundaryPoint::new([0, 2])));
        assert_eq!(b.first_shared(&a), Some(&BoundaryPoint::new([0, 2])));
        let none = SiteSet::empty(BoundaryClass::Outlet);
        assert_eq!(a.first_shared(&none), None);
    }

    #[test]
    fn place_test() {
        let sites = SiteSet::new(
            BoundaryClass::Outlet,
            vec![BoundaryPoint::new([3, 1]), BoundaryPoint::new([0, 4])],
        )
        .unwrap();
        let err = sites.place(&AABB::from_extents([4, 4])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "outlet site (0 4) is outside the velocity field [0..=3, 0..=3]"
        );

        let aabb = AABB::from_extents([4, 5]);
        let placed = sites.place(&aabb).unwrap();
        assert_eq!(placed.aabb(), &aabb);
        assert_eq!(placed.as_slice().len(), 2);
        placed.assert_fits(&aabb);
    }

    #[test]
    #[should_panic]
    fn other_extent_panics_test() {
        let sites =
            SiteSet::new(BoundaryClass::Inlet, vec![BoundaryPoint::new([0, 0])])
                .unwrap();
        let placed = sites.place(&AABB::from_extents([4, 4])).unwrap();
        placed.assert_fits(&AABB::from_extents([2, 2]));
    }
}
