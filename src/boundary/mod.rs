//! Inlet and outlet velocity boundaries.

mod engine;
mod point;
mod policy;
pub mod profiles;
mod sites;
mod update_function;

pub use engine::*;
pub use point::*;
pub use policy::*;
pub use sites::*;
pub use update_function::*;
