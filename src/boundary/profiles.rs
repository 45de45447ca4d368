//! Ready-made update functions for common inflow shapes.

use crate::boundary::*;

pub fn constant<const GRID_DIMENSION: usize>(
    value: f64,
) -> UpdateFunction<GRID_DIMENSION> {
    update_function(move |_, _| value)
}

pub fn zero<const GRID_DIMENSION: usize>() -> UpdateFunction<GRID_DIMENSION> {
    constant(0.0)
}

/// `rate * t`
pub fn linear<const GRID_DIMENSION: usize>(
    rate: f64,
) -> UpdateFunction<GRID_DIMENSION> {
    update_function(move |t, _| rate * t)
}

/// Smooth start-up, `amplitude * (1 - exp(-rate * t))`.
/// Starts at zero and approaches `amplitude` without a jump at `t = 0`.
pub fn exponential_ramp<const GRID_DIMENSION: usize>(
    amplitude: f64,
    rate: f64,
) -> UpdateFunction<GRID_DIMENSION> {
    update_function(move |t, _| ramp_value(amplitude, rate, t))
}

/// Exponential ramp whose sign depends on which wall a site sits on:
/// positive where `coords[axis] == low`, negative where
/// `coords[axis] == high`, zero anywhere else.
///
/// This is the driving profile of a lid driven cavity whose moving walls
/// are opposite faces along `axis`.
pub fn wall_ramp<const GRID_DIMENSION: usize>(
    axis: usize,
    low: i32,
    high: i32,
    amplitude: f64,
    rate: f64,
) -> UpdateFunction<GRID_DIMENSION> {
    debug_assert!(axis < GRID_DIMENSION);
    update_function(move |t, p: &BoundaryPoint<GRID_DIMENSION>| {
        let c = p.coord(axis);
        if c == low {
            ramp_value(amplitude, rate, t)
        } else if c == high {
            -ramp_value(amplitude, rate, t)
        } else {
            0.0
        }
    })
}

/// One `wall_ramp` per component, component `d` keyed on axis `d`.
///
/// Every component pushes into the domain from its `low` wall and out of
/// it at its `high` wall, so a site on the `x == low` face gets a ramped
/// `u_x` and nothing tangential.
pub fn wall_ramps<const GRID_DIMENSION: usize>(
    low: i32,
    high: i32,
    amplitude: f64,
    rate: f64,
) -> Vec<UpdateFunction<GRID_DIMENSION>> {
    (0..GRID_DIMENSION)
        .map(|axis| wall_ramp(axis, low, high, amplitude, rate))
        .collect()
}

/// The same `f` for every component.
pub fn uniform<const GRID_DIMENSION: usize>(
    f: UpdateFunction<GRID_DIMENSION>,
) -> Vec<UpdateFunction<GRID_DIMENSION>> {
    vec![f; GRID_DIMENSION]
}

#[inline]
fn ramp_value(amplitude: f64, rate: f64, t: f64) -> f64 {
    amplitude * (1.0 - (-rate * t).exp())
}
