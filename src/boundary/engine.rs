use crate::boundary::*;
use crate::config::EngineParameters;
use crate::error::{BoundaryClass, BoundaryError};
use crate::field::*;
use crate::strategy::*;

/// Update functions for both classes, always `GRID_DIMENSION` long.
struct FunctionSet<const GRID_DIMENSION: usize> {
    inlet: UpdateFunctions<GRID_DIMENSION>,
    outlet: UpdateFunctions<GRID_DIMENSION>,
}

/// Dirichlet velocity boundary for inlet and outlet sites.
///
/// Configured once with `attach_nodes` and `attach_update_functions`,
/// then `update_nodes` is called every time step. The inlet pass
/// always finishes before the outlet pass starts. How the sites of a
/// pass are scheduled is up to `S`.
///
/// Sites are validated on attach: duplicates within a class and sites
/// shared between classes are rejected, so every site of a pass writes
/// its own cells and concurrent strategies need no locking.
pub struct VelocityBoundary<S: ExecutionStrategy, const GRID_DIMENSION: usize>
{
    strategy: S,
    inlet_nodes: SiteSet<GRID_DIMENSION>,
    outlet_nodes: SiteSet<GRID_DIMENSION>,
    functions: Option<FunctionSet<GRID_DIMENSION>>,
}

impl<const GRID_DIMENSION: usize> VelocityBoundary<Strategy, GRID_DIMENSION> {
    /// Engine running whichever strategy `parameters` select.
    pub fn from_parameters(
        parameters: &EngineParameters,
    ) -> Result<Self, BoundaryError> {
        Ok(Self::new(parameters.build_strategy()?))
    }
}

impl<S: ExecutionStrategy, const GRID_DIMENSION: usize>
    VelocityBoundary<S, GRID_DIMENSION>
{
    pub fn new(strategy: S) -> Self {
        VelocityBoundary {
            strategy,
            inlet_nodes: SiteSet::empty(BoundaryClass::Inlet),
            outlet_nodes: SiteSet::empty(BoundaryClass::Outlet),
            functions: None,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn inlet_nodes(&self) -> &[BoundaryPoint<GRID_DIMENSION>] {
        self.inlet_nodes.as_slice()
    }

    pub fn outlet_nodes(&self) -> &[BoundaryPoint<GRID_DIMENSION>] {
        self.outlet_nodes.as_slice()
    }

    pub fn has_update_functions(&self) -> bool {
        self.functions.is_some()
    }

    /// Replace both site lists.
    /// On error the previous configuration is kept.
    pub fn attach_nodes(
        &mut self,
        inlet_nodes: Vec<BoundaryPoint<GRID_DIMENSION>>,
        outlet_nodes: Vec<BoundaryPoint<GRID_DIMENSION>>,
    ) -> Result<(), BoundaryError> {
        let (inlet_nodes, outlet_nodes) =
            match check_sites(inlet_nodes, outlet_nodes) {
                Ok(sites) => sites,
                Err(e) => {
                    tracing::warn!("rejected boundary sites: {}", e);
                    return Err(e);
                }
            };
        tracing::debug!(
            inlet = inlet_nodes.len(),
            outlet = outlet_nodes.len(),
            "attached boundary sites"
        );
        self.inlet_nodes = inlet_nodes;
        self.outlet_nodes = outlet_nodes;
        Ok(())
    }

    /// Replace the update functions, one per velocity component and class.
    /// On error the previous functions are kept.
    pub fn attach_update_functions(
        &mut self,
        inlet_functions: Vec<UpdateFunction<GRID_DIMENSION>>,
        outlet_functions: Vec<UpdateFunction<GRID_DIMENSION>>,
    ) -> Result<(), BoundaryError> {
        let functions = match (
            to_components(BoundaryClass::Inlet, inlet_functions),
            to_components(BoundaryClass::Outlet, outlet_functions),
        ) {
            (Ok(inlet), Ok(outlet)) => FunctionSet { inlet, outlet },
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("rejected update functions: {}", e);
                return Err(e);
            }
        };
        tracing::debug!(
            components = GRID_DIMENSION,
            "attached update functions"
        );
        self.functions = Some(functions);
        Ok(())
    }

    /// Impose boundary velocities for `time_step`.
    ///
    /// `density` is unused by velocity boundaries, it is accepted so this
    /// matches the update call of density driven boundaries.
    pub fn update_nodes<FieldType: VelocityView<GRID_DIMENSION>>(
        &self,
        time_step: f64,
        velocity: &mut FieldType,
        _density: &DensityField<GRID_DIMENSION>,
    ) -> Result<(), BoundaryError> {
        self.update_velocity(time_step, velocity)
    }

    /// Impose boundary velocities for `time_step`.
    ///
    /// Every site is checked against the field before anything is
    /// written, so on error the field is untouched.
    pub fn update_velocity<FieldType: VelocityView<GRID_DIMENSION>>(
        &self,
        time_step: f64,
        velocity: &mut FieldType,
    ) -> Result<(), BoundaryError> {
        profiling::scope!("velocity_boundary: update");
        if self.inlet_nodes.is_empty() && self.outlet_nodes.is_empty() {
            return Ok(());
        }
        let functions = self
            .functions
            .as_ref()
            .ok_or(BoundaryError::MissingUpdateFunctions)?;

        let inlet = self.inlet_nodes.place(velocity.aabb())?;
        let outlet = self.outlet_nodes.place(velocity.aabb())?;

        tracing::trace!(
            strategy = self.strategy.name(),
            time_step,
            "updating boundary velocities"
        );
        self.strategy.apply(
            &inlet,
            &SiteRule::new(&functions.inlet, time_step),
            velocity,
        );
        self.strategy.apply(
            &outlet,
            &SiteRule::new(&functions.outlet, time_step),
            velocity,
        );
        Ok(())
    }

    /// Human readable listing of the inlet then outlet sites.
    pub fn dump_configuration(&self) -> String {
        self.to_string()
    }

    /// Emit `dump_configuration` at debug level.
    pub fn log_configuration(&self) {
        tracing::debug!("boundary configuration:\n{}", self);
    }
}

impl<S: ExecutionStrategy, const GRID_DIMENSION: usize> std::fmt::Display
    for VelocityBoundary<S, GRID_DIMENSION>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Inlet nodes:")?;
        for (i, node) in self.inlet_nodes().iter().enumerate() {
            writeln!(f, "Node {}: {}", i, node)?;
        }
        writeln!(f, "Outlet nodes:")?;
        for (i, node) in self.outlet_nodes().iter().enumerate() {
            writeln!(f, "Node {}: {}", i, node)?;
        }
        Ok(())
    }
}

impl<S: ExecutionStrategy, const GRID_DIMENSION: usize>
    BoundaryPolicy<GRID_DIMENSION> for VelocityBoundary<S, GRID_DIMENSION>
{
    fn reads_density(&self) -> bool {
        false
    }

    fn apply<FieldType: VelocityView<GRID_DIMENSION>>(
        &self,
        time_step: f64,
        velocity: &mut FieldType,
        _density: Option<&DensityField<GRID_DIMENSION>>,
    ) -> Result<(), BoundaryError> {
        self.update_velocity(time_step, velocity)
    }
}

type SitePair<const GRID_DIMENSION: usize> =
    (SiteSet<GRID_DIMENSION>, SiteSet<GRID_DIMENSION>);

fn check_sites<const GRID_DIMENSION: usize>(
    inlet_nodes: Vec<BoundaryPoint<GRID_DIMENSION>>,
    outlet_nodes: Vec<BoundaryPoint<GRID_DIMENSION>>,
) -> Result<SitePair<GRID_DIMENSION>, BoundaryError> {
    let inlet = SiteSet::new(BoundaryClass::Inlet, inlet_nodes)?;
    let outlet = SiteSet::new(BoundaryClass::Outlet, outlet_nodes)?;
    if let Some(shared) = inlet.first_shared(&outlet) {
        return Err(BoundaryError::OverlappingSites {
            coords: shared.to_string(),
        });
    }
    Ok((inlet, outlet))
}

fn to_components<const GRID_DIMENSION: usize>(
    class: BoundaryClass,
    functions: Vec<UpdateFunction<GRID_DIMENSION>>,
) -> Result<UpdateFunctions<GRID_DIMENSION>, BoundaryError> {
    let actual = functions.len();
    functions
        .try_into()
        .map_err(|_| BoundaryError::FunctionCount {
            class,
            expected: GRID_DIMENSION,
            actual,
        })
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::boundary::profiles::*;
    use crate::util::*;
    use float_cmp::assert_approx_eq;

    fn column_engine() -> VelocityBoundary<Sequential, 2> {
        let mut engine = VelocityBoundary::new(Sequential::new());
        engine
            .attach_nodes(
                vec![BoundaryPoint::new([0, 1]), BoundaryPoint::new([0, 2])],
                vec![BoundaryPoint::new([3, 1]), BoundaryPoint::new([3, 2])],
            )
            .unwrap();
        engine
            .attach_update_functions(
                vec![zero(), linear(0.1)],
                vec![zero(), linear(-0.1)],
            )
            .unwrap();
        engine
    }

    #[test]
    fn dump_configuration_test() {
        let engine = column_engine();
        assert_eq!(
            engine.dump_configuration(),
            "Inlet nodes:\n\
             Node 0: 0 1\n\
             Node 1: 0 2\n\
             Outlet nodes:\n\
             Node 0: 3 1\n\
             Node 1: 3 2\n"
        );

        let empty = VelocityBoundary::<Sequential, 3>::new(Sequential::new());
        assert_eq!(
            empty.dump_configuration(),
            "Inlet nodes:\nOutlet nodes:\n"
        );
    }

    #[test]
    fn update_nodes_test() {
        let engine = column_engine();
        let mut velocity = VelocityField::from_extents([4, 4]);
        let density = DensityField::new(*velocity.aabb(), 1.0);
        engine.update_nodes(2.0, &mut velocity, &density).unwrap();

        for y in [1, 2] {
            assert_approx_eq!(f64, velocity.view(&vector![0, y], 1), 0.2);
            assert_approx_eq!(f64, velocity.view(&vector![3, y], 1), -0.2);
            assert_eq!(velocity.view(&vector![0, y], 0), 0.0);
            assert_eq!(velocity.view(&vector![3, y], 0), 0.0);
        }
        assert!(density.buffer().iter().all(|d| *d == 1.0));
    }

    #[test]
    fn rejected_attach_keeps_previous_test() {
        let mut engine = column_engine();
        let err = engine
            .attach_nodes(
                vec![BoundaryPoint::new([1, 1])],
                vec![BoundaryPoint::new([1, 1])],
            )
            .unwrap_err();
        assert!(matches!(err, BoundaryError::OverlappingSites { .. }));
        assert_eq!(engine.inlet_nodes().len(), 2);
        assert_eq!(engine.outlet_nodes()[0], BoundaryPoint::new([3, 1]));

        let err = engine
            .attach_update_functions(vec![zero()], vec![zero(), zero()])
            .unwrap_err();
        assert!(matches!(
            err,
            BoundaryError::FunctionCount {
                class: BoundaryClass::Inlet,
                expected: 2,
                actual: 1
            }
        ));
        assert!(engine.has_update_functions());

        // Old functions are still active
        let mut velocity = VelocityField::from_extents([4, 4]);
        engine.update_velocity(1.0, &mut velocity).unwrap();
        assert_approx_eq!(f64, velocity.view(&vector![0, 1], 1), 0.1);
    }

    #[test]
    fn duplicate_site_test() {
        let mut engine = VelocityBoundary::<_, 2>::new(Sequential::new());
        let err = engine
            .attach_nodes(
                vec![],
                vec![BoundaryPoint::new([2, 2]), BoundaryPoint::new([2, 2])],
            )
            .unwrap_err();
        match err {
            BoundaryError::DuplicateSite { class, coords } => {
                assert_eq!(class, BoundaryClass::Outlet);
                assert_eq!(coords, "2 2");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_functions_test() {
        let mut engine = VelocityBoundary::<_, 2>::new(Sequential::new());
        let mut velocity = VelocityField::from_extents([4, 4]);

        // Nothing attached is a no-op
        engine.update_velocity(1.0, &mut velocity).unwrap();

        engine
            .attach_nodes(vec![BoundaryPoint::new([0, 0])], vec![])
            .unwrap();
        assert!(matches!(
            engine.update_velocity(1.0, &mut velocity),
            Err(BoundaryError::MissingUpdateFunctions)
        ));
    }

    #[test]
    fn out_of_range_leaves_field_test() {
        let mut engine = column_engine();
        engine
            .attach_nodes(
                vec![BoundaryPoint::new([0, 1])],
                vec![BoundaryPoint::new([4, 1])],
            )
            .unwrap();
        let mut velocity = VelocityField::from_extents([4, 4]);
        let err = engine.update_velocity(3.0, &mut velocity).unwrap_err();
        match err {
            BoundaryError::OutOfRange { class, coords, .. } => {
                assert_eq!(class, BoundaryClass::Outlet);
                assert_eq!(coords, "4 1");
            }
            other => panic!("unexpected {:?}", other),
        }
        // The inlet pass did not run either
        assert!(velocity.buffer().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn policy_test() {
        let engine = column_engine();
        assert!(!engine.reads_density());
        let mut velocity = VelocityField::from_extents([4, 4]);
        engine.apply(2.0, &mut velocity, None).unwrap();
        assert_approx_eq!(f64, velocity.view(&vector![3, 2], 1), -0.2);
    }

    #[test]
    fn from_parameters_test() {
        let parameters = EngineParameters {
            strategy: StrategyKind::Offload,
            threads: 2,
            ..Default::default()
        };
        let engine =
            VelocityBoundary::<Strategy, 2>::from_parameters(&parameters)
                .unwrap();
        assert_eq!(engine.strategy().kind(), StrategyKind::Offload);
    }
}
