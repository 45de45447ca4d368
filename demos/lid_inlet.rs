use lbinlet::boundary::profiles::*;
use lbinlet::cli::Args;
use lbinlet::util::*;
use lbinlet::*;

use std::time::Instant;

fn build_boundary(
    args: &Args,
    parameters: &EngineParameters,
) -> Result<VelocityBoundary<Strategy, 2>, BoundaryError> {
    let last = args.domain_size as i32 - 1;

    // Inlet along the x = 0 wall and outlet along x = last,
    // both leaving out the corner sites.
    let inlet = lbinlet::boundary::points_in_box([0, 1], [0, last - 1]);
    let outlet = lbinlet::boundary::points_in_box([last, 1], [last, last - 1]);

    let mut boundary = VelocityBoundary::from_parameters(parameters)?;
    boundary.attach_nodes(inlet, outlet)?;
    boundary.attach_update_functions(
        wall_ramps(0, last, args.amplitude, args.ramp_rate),
        uniform(zero()),
    )?;
    Ok(boundary)
}

fn run(
    args: &Args,
    boundary: &VelocityBoundary<Strategy, 2>,
) -> Result<VelocityField<2>, BoundaryError> {
    let grid_bound = args.grid_bounds();
    let mut velocity = VelocityField::new(grid_bound);
    let density = DensityField::new(grid_bound, 1.0);
    let sample = vector![0, args.domain_size as i32 / 2];

    let start = Instant::now();
    for step in 0..args.steps {
        boundary.update_nodes(step as f64, &mut velocity, &density)?;
        if args.log_every != 0 && step % args.log_every == 0 {
            tracing::info!(
                step,
                ux = velocity.view(&sample, 0),
                uy = velocity.view(&sample, 1),
                "inlet sample"
            );
        }
    }
    let elapsed = start.elapsed();
    tracing::info!(
        strategy = boundary.strategy().name(),
        steps = args.steps,
        seconds = elapsed.as_secs_f64(),
        "boundary updates finished"
    );
    Ok(velocity)
}

fn main() -> Result<(), BoundaryError> {
    let args = Args::cli_setup("lid_inlet");
    if args.domain_size < 3 {
        return Err(BoundaryError::invalid_parameters(
            "domain_size must be at least 3",
        ));
    }

    let parameters = args.parameters();
    let boundary = build_boundary(&args, &parameters)?;
    if args.dump {
        print!("{}", boundary.dump_configuration());
    }
    boundary.log_configuration();

    let velocity = run(&args, &boundary)?;

    if args.verify {
        let reference = EngineParameters {
            strategy: StrategyKind::Sequential,
            ..parameters
        };
        let reference = run(&args, &build_boundary(&args, &reference)?)?;
        if bit_identical(&reference, &velocity) {
            tracing::info!("matches sequential result");
        } else {
            tracing::error!("differs from sequential result");
            std::process::exit(1);
        }
    }
    Ok(())
}
