//! Execution strategies fan the per-site boundary work out over the
//! sites of one class. Every strategy produces the same field for the
//! same input; they only differ in scheduling.
//!
//! Concurrent strategies rely on the sites of one class being distinct,
//! so every task writes its own part of the field and nothing is locked.

mod data_parallel;
mod offload;
mod sequential;
mod thread_parallel;

pub use data_parallel::*;
pub use offload::*;
pub use sequential::*;
pub use thread_parallel::*;

use crate::boundary::*;
use crate::error::BoundaryError;
use crate::field::*;
use clap::ValueEnum;

pub trait ExecutionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Evaluate `rule` for every site and write the results into `field`.
    /// Returns once every site has been written.
    ///
    /// Panics if `sites` were placed in a different extent than `field`
    /// covers.
    fn apply<
        const GRID_DIMENSION: usize,
        FieldType: VelocityView<GRID_DIMENSION>,
    >(
        &self,
        sites: &PlacedSites<'_, GRID_DIMENSION>,
        rule: &SiteRule<'_, GRID_DIMENSION>,
        field: &mut FieldType,
    );
}

/// Strategy selection for configs and the command line.
#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Single threaded ordered loop
    #[default]
    Sequential,

    /// Chunks of sites spawned onto a dedicated thread pool
    ThreadParallel,

    /// Parallel iterator over sites on the current rayon pool
    DataParallel,

    /// Work groups computed into device-local buffers, then copied back
    Offload,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Sequential,
        StrategyKind::ThreadParallel,
        StrategyKind::DataParallel,
        StrategyKind::Offload,
    ];
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::ThreadParallel => "thread-parallel",
            StrategyKind::DataParallel => "data-parallel",
            StrategyKind::Offload => "offload",
        };
        write!(f, "{}", name)
    }
}

/// Any of the strategies, chosen at runtime.
#[derive(Debug)]
pub enum Strategy {
    Sequential(Sequential),
    ThreadParallel(ThreadParallel),
    DataParallel(DataParallel),
    Offload(Offload),
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Sequential(_) => StrategyKind::Sequential,
            Strategy::ThreadParallel(_) => StrategyKind::ThreadParallel,
            Strategy::DataParallel(_) => StrategyKind::DataParallel,
            Strategy::Offload(_) => StrategyKind::Offload,
        }
    }
}

impl ExecutionStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential(s) => s.name(),
            Strategy::ThreadParallel(s) => s.name(),
            Strategy::DataParallel(s) => s.name(),
            Strategy::Offload(s) => s.name(),
        }
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
        match self {
            Strategy::Sequential(s) => s.apply(sites, rule, field),
            Strategy::ThreadParallel(s) => s.apply(sites, rule, field),
            Strategy::DataParallel(s) => s.apply(sites, rule, field),
            Strategy::Offload(s) => s.apply(sites, rule, field),
        }
    }
}

impl From<Sequential> for Strategy {
    fn from(s: Sequential) -> Self {
        Strategy::Sequential(s)
    }
}

impl From<ThreadParallel> for Strategy {
    fn from(s: ThreadParallel) -> Self {
        Strategy::ThreadParallel(s)
    }
}

impl From<DataParallel> for Strategy {
    fn from(s: DataParallel) -> Self {
        Strategy::DataParallel(s)
    }
}

impl From<Offload> for Strategy {
    fn from(s: Offload) -> Self {
        Strategy::Offload(s)
    }
}

fn require_nonzero(name: &str, value: usize) -> Result<(), BoundaryError> {
    if value == 0 {
        return Err(BoundaryError::invalid_parameters(format!(
            "{} must be at least 1",
            name
        )));
    }
    Ok(())
}
