use crate::error::BoundaryError;
use crate::field::*;

/// A boundary condition applied once per time step.
///
/// Policies report which fields they read, so the caller only needs to
/// supply density to the policies that use it.
pub trait BoundaryPolicy<const GRID_DIMENSION: usize> {
    /// Whether `apply` reads the density field.
    fn reads_density(&self) -> bool;

    /// `density` may be `None` when `reads_density` is false.
    fn apply<FieldType: VelocityView<GRID_DIMENSION>>(
        &self,
        time_step: f64,
        velocity: &mut FieldType,
        density: Option<&DensityField<GRID_DIMENSION>>,
    ) -> Result<(), BoundaryError>;
}

/// Apply every policy in order, handing density only to those that
/// ask for it.
pub fn apply_all<
    const GRID_DIMENSION: usize,
    P: BoundaryPolicy<GRID_DIMENSION>,
    FieldType: VelocityView<GRID_DIMENSION>,
>(
    policies: &[P],
    time_step: f64,
    velocity: &mut FieldType,
    density: &DensityField<GRID_DIMENSION>,
) -> Result<(), BoundaryError> {
    for policy in policies {
        let density = policy.reads_density().then_some(density);
        policy.apply(time_step, velocity, density)?;
    }
    Ok(())
}
