use lbinlet::boundary::profiles::*;
use lbinlet::*;

fn engine() -> VelocityBoundary<Strategy, 2> {
    VelocityBoundary::from_parameters(&EngineParameters::default()).unwrap()
}

#[test]
fn shared_site_rejected() {
    let mut engine = engine();
    let err = engine
        .attach_nodes(
            vec![BoundaryPoint::new([0, 1]), BoundaryPoint::new([0, 2])],
            vec![BoundaryPoint::new([3, 1]), BoundaryPoint::new([0, 2])],
        )
        .unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err.to_string(), "site (0 2) is both an inlet and an outlet");
    assert!(engine.inlet_nodes().is_empty());
    assert!(engine.outlet_nodes().is_empty());
}

#[test]
fn duplicate_inlet_rejected() {
    let mut engine = engine();
    let err = engine
        .attach_nodes(
            vec![
                BoundaryPoint::new([5, 5]),
                BoundaryPoint::new([1, 1]),
                BoundaryPoint::new([5, 5]),
            ],
            vec![],
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "inlet site (5 5) is listed more than once");
}

#[test]
fn function_count_rejected() {
    let mut engine = engine();
    let err = engine
        .attach_update_functions(vec![constant(1.0)], vec![zero(), zero()])
        .unwrap_err();
    assert_eq!(err.to_string(), "inlet update functions: expected 2, got 1");

    let err = engine
        .attach_update_functions(
            vec![zero(), zero()],
            vec![zero(), zero(), zero()],
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "outlet update functions: expected 2, got 3");
    assert!(!engine.has_update_functions());
}

#[test]
fn reattach_replaces_configuration() {
    let mut engine = engine();
    engine
        .attach_nodes(vec![BoundaryPoint::new([0, 0])], vec![])
        .unwrap();
    engine
        .attach_update_functions(uniform(constant(1.0)), uniform(zero()))
        .unwrap();
    engine
        .attach_nodes(vec![BoundaryPoint::new([1, 1])], vec![])
        .unwrap();
    engine
        .attach_update_functions(uniform(constant(2.0)), uniform(zero()))
        .unwrap();

    let mut velocity = VelocityField::from_extents([2, 2]);
    engine.update_velocity(0.0, &mut velocity).unwrap();
    assert_eq!(velocity.buffer(), &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0]);
}

#[test]
fn out_of_range_site_reported() {
    let mut engine = engine();
    engine
        .attach_nodes(
            vec![BoundaryPoint::new([0, -1])],
            vec![BoundaryPoint::new([1, 1])],
        )
        .unwrap();
    engine
        .attach_update_functions(uniform(constant(1.0)), uniform(constant(1.0)))
        .unwrap();

    let mut velocity = VelocityField::from_extents([2, 2]);
    let err = engine.update_velocity(0.0, &mut velocity).unwrap_err();
    assert!(!err.is_configuration_error());
    assert_eq!(
        err.to_string(),
        "inlet site (0 -1) is outside the velocity field [0..=1, 0..=1]"
    );
    assert!(velocity.buffer().iter().all(|v| *v == 0.0));
}

#[test]
fn zero_sized_parameters_rejected() {
    for parameters in [
        EngineParameters {
            strategy: StrategyKind::ThreadParallel,
            threads: 0,
            ..Default::default()
        },
        EngineParameters {
            strategy: StrategyKind::ThreadParallel,
            chunk_size: 0,
            ..Default::default()
        },
        EngineParameters {
            strategy: StrategyKind::DataParallel,
            min_len: 0,
            ..Default::default()
        },
        EngineParameters {
            strategy: StrategyKind::Offload,
            work_group_size: 0,
            ..Default::default()
        },
    ] {
        let result =
            VelocityBoundary::<Strategy, 2>::from_parameters(&parameters);
        assert!(
            matches!(result, Err(BoundaryError::InvalidParameters(_))),
            "{:?}",
            parameters
        );
    }
}

#[test]
fn strategies_only_take_validated_sites() {
    let repeated = vec![BoundaryPoint::new([2]); 10_000];
    let err = SiteSet::new(BoundaryClass::Inlet, repeated).unwrap_err();
    assert!(matches!(err, BoundaryError::DuplicateSite { .. }));

    let sites = SiteSet::new(
        BoundaryClass::Outlet,
        vec![BoundaryPoint::new([1, 1]), BoundaryPoint::new([0, 4])],
    )
    .unwrap();
    let mut velocity = VelocityField::from_extents([4, 4]);
    let err = sites.place(velocity.aabb()).unwrap_err();
    assert!(matches!(
        err,
        BoundaryError::OutOfRange {
            class: BoundaryClass::Outlet,
            ..
        }
    ));

    let functions: UpdateFunctions<2> = [constant(1.0), linear(2.0)];
    let rule = SiteRule::new(&functions, 1.5);
    let sites = SiteSet::new(
        BoundaryClass::Inlet,
        vec![BoundaryPoint::new([1, 1]), BoundaryPoint::new([3, 0])],
    )
    .unwrap();
    let placed = sites.place(velocity.aabb()).unwrap();
    let strategy = ThreadParallel::new(4, 1).unwrap();
    strategy.apply(&placed, &rule, &mut velocity);
    assert_eq!(velocity.view(&lbinlet::util::vector![1, 1], 1), 3.0);
    assert_eq!(velocity.view(&lbinlet::util::vector![3, 0], 0), 1.0);
}

#[test]
#[should_panic]
fn placed_sites_bound_to_their_field() {
    let sites =
        SiteSet::new(BoundaryClass::Inlet, vec![BoundaryPoint::new([0, 7])])
            .unwrap();
    let placed = sites.place(velocity_extent(8).aabb()).unwrap();
    let functions: UpdateFunctions<2> = [zero(), zero()];
    let mut small = velocity_extent(4);
    DataParallel::default().apply(
        &placed,
        &SiteRule::new(&functions, 0.0),
        &mut small,
    );
}

fn velocity_extent(size: usize) -> VelocityField<2> {
    VelocityField::from_extents([size, size])
}
