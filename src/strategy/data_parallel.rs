use super::*;
use rayon::prelude::*;

/// One parallel iterator over the sites, scheduled by whatever rayon pool
/// the caller is running in.
#[derive(Copy, Clone, Debug)]
pub struct DataParallel {
    min_len: usize,
}

impl DataParallel {
    /// `min_len` is the fewest sites rayon will hand to one task.
    pub fn new(min_len: usize) -> Result<Self, BoundaryError> {
        require_nonzero("min_len", min_len)?;
        Ok(DataParallel { min_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for DataParallel {
    fn default() -> Self {
        DataParallel { min_len: 1 }
    }
}

impl ExecutionStrategy for DataParallel {
    fn name(&self) -> &'static str {
        "data-parallel"
    }

    fn apply<
        const GRID_DIMENSION: usize,
        FieldType: VelocityView<GRID_DIMENSION>,
    >(
        &self,
        sites: &PlacedSites<'_, GRID_DIMENSION>,
        rule: &SiteRule<'_, GRID_DIMENSION>,
        field: &mut FieldType,
    ) {
        profiling::scope!("data_parallel: apply");
        sites.assert_fits(field.aabb());
        let writer = field.writer();
        sites
            .as_slice()
            .par_iter()
            .with_min_len(self.min_len)
            .for_each(|site: &BoundaryPoint<GRID_DIMENSION>| {
                // Values live on this element's stack, never shared.
                let values = rule.evaluate(site);
                // Placed sites are unique and inside the field.
                unsafe { writer.write_site(site.coords(), &values) };
            });
    }
}
