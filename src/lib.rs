//! Time varying inlet and outlet velocity boundaries for lattice
//! Boltzmann simulations.
//!
//! `VelocityBoundary` owns the boundary sites and their update functions
//! and writes imposed velocities into the lattice velocity field once per
//! time step. The scheduling of the per-site work is injected as an
//! `ExecutionStrategy`, all of which produce identical fields.

pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod strategy;
pub mod util;

pub use boundary::*;
pub use config::EngineParameters;
pub use error::{BoundaryClass, BoundaryError};
pub use field::*;
pub use strategy::*;
