use crate::error::BoundaryError;
use crate::strategy::*;

/// Boundary engine construction is configurable.
/// These are all the parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineParameters {
    /// How per-site work is scheduled.
    pub strategy: StrategyKind,

    /// Threads for strategies that own a pool
    /// (thread-parallel and offload).
    pub threads: usize,

    /// Sites per spawned task for thread-parallel.
    pub chunk_size: usize,

    /// Fewest sites per task for data-parallel.
    pub min_len: usize,

    /// Work items per group for offload.
    pub work_group_size: usize,
}

impl std::default::Default for EngineParameters {
    fn default() -> Self {
        EngineParameters {
            strategy: StrategyKind::Sequential,
            threads: 1,
            chunk_size: 1000,
            min_len: 1,
            work_group_size: 256,
        }
    }
}

impl EngineParameters {
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        EngineParameters {
            strategy,
            ..Default::default()
        }
    }

    pub fn build_strategy(&self) -> Result<Strategy, BoundaryError> {
        let strategy = match self.strategy {
            StrategyKind::Sequential => Sequential::new().into(),
            StrategyKind::ThreadParallel => {
                ThreadParallel::new(self.threads, self.chunk_size)?.into()
            }
            StrategyKind::DataParallel => {
                DataParallel::new(self.min_len)?.into()
            }
            StrategyKind::Offload => {
                Offload::new(self.threads, self.work_group_size)?.into()
            }
        };
        tracing::debug!(parameters = ?self, "built boundary strategy");
        Ok(strategy)
    }
}
