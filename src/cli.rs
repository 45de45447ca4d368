use crate::config::EngineParameters;
use crate::strategy::StrategyKind;
use crate::util::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Inlet / outlet velocity boundary driver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Domain size, assume square
    #[arg(short, long, default_value = "100")]
    pub domain_size: usize,

    /// How many time steps to run.
    #[arg(short, long, default_value = "3000")]
    pub steps: usize,

    /// Execution strategy for boundary updates.
    #[arg(long, default_value = "sequential")]
    pub strategy: StrategyKind,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Chunk size to use for thread-parallel updates.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Minimum sites per task for data-parallel updates.
    #[arg(long, default_value = "1")]
    pub min_len: usize,

    /// Work group size for offload updates.
    #[arg(long, default_value = "256")]
    pub work_group_size: usize,

    /// Peak inlet velocity.
    #[arg(long, default_value = "0.2")]
    pub amplitude: f64,

    /// Exponential start-up rate of the inlet ramp.
    #[arg(long, default_value = "0.125")]
    pub ramp_rate: f64,

    /// Print the boundary configuration before running
    #[arg(long)]
    pub dump: bool,

    /// Compare the final field against the sequential strategy
    #[arg(long)]
    pub verify: bool,

    /// Log every n steps, 0 to disable
    #[arg(long, default_value = "500")]
    pub log_every: usize,
}

impl Args {
    /// Parse the command line and install the log subscriber.
    /// `RUST_LOG` overrides the default `info` filter.
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));
        // A subscriber may already be installed by an embedding program
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        tracing::info!(name, version = env!("CARGO_PKG_VERSION"), "starting");
        args
    }

    pub fn parameters(&self) -> EngineParameters {
        EngineParameters {
            strategy: self.strategy,
            threads: self.threads,
            chunk_size: self.chunk_size,
            min_len: self.min_len,
            work_group_size: self.work_group_size,
        }
    }

    pub fn grid_bounds(&self) -> AABB<2> {
        AABB::from_extents([self.domain_size; 2])
    }
}
