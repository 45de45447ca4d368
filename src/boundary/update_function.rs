use crate::boundary::BoundaryPoint;
use std::sync::Arc;

/// Velocity imposed on one component of a boundary site at a given time.
///
/// Must be pure: the result may depend only on `(time, point)` and on
/// whatever the closure captured when it was built.
pub type UpdateFunction<const GRID_DIMENSION: usize> =
    Arc<dyn Fn(f64, &BoundaryPoint<GRID_DIMENSION>) -> f64 + Send + Sync>;

/// One update function per velocity component.
pub type UpdateFunctions<const GRID_DIMENSION: usize> =
    [UpdateFunction<GRID_DIMENSION>; GRID_DIMENSION];

/// Box a closure as an `UpdateFunction`.
pub fn update_function<const GRID_DIMENSION: usize, F>(
    f: F,
) -> UpdateFunction<GRID_DIMENSION>
where
    F: Fn(f64, &BoundaryPoint<GRID_DIMENSION>) -> f64 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The update functions of one boundary class bound to one time step.
/// Strategies call `evaluate` once per site.
pub struct SiteRule<'a, const GRID_DIMENSION: usize> {
    functions: &'a UpdateFunctions<GRID_DIMENSION>,
    time_step: f64,
}

impl<'a, const GRID_DIMENSION: usize> SiteRule<'a, GRID_DIMENSION> {
    pub fn new(
        functions: &'a UpdateFunctions<GRID_DIMENSION>,
        time_step: f64,
    ) -> Self {
        SiteRule {
            functions,
            time_step,
        }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// All component values for `site`.
    /// The returned array is the caller's own scratch space.
    #[inline]
    pub fn evaluate(
        &self,
        site: &BoundaryPoint<GRID_DIMENSION>,
    ) -> [f64; GRID_DIMENSION] {
        std::array::from_fn(|component| {
            (self.functions[component])(self.time_step, site)
        })
    }
}
