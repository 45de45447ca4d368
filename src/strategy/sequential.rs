use super::*;

/// Ordered single threaded loop, the reference for the other strategies.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sequential;

impl Sequential {
    pub fn new() -> Self {
        Sequential
    }
}

impl ExecutionStrategy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
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
        profiling::scope!("sequential: apply");
        sites.assert_fits(field.aabb());
        for site in sites.as_slice() {
            let values = rule.evaluate(site);
            field.set_site(site.coords(), &values);
        }
    }
}
