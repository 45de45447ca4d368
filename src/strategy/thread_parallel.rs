use super::*;

/// Sites are cut into chunks and each chunk is spawned as one task
/// on a dedicated thread pool.
#[derive(Debug)]
pub struct ThreadParallel {
    pool: rayon::ThreadPool,
    threads: usize,
    chunk_size: usize,
}

impl ThreadParallel {
    pub fn new(
        threads: usize,
        chunk_size: usize,
    ) -> Result<Self, BoundaryError> {
        require_nonzero("threads", threads)?;
        require_nonzero("chunk_size", chunk_size)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("boundary_thread_{}", i))
            .build()?;
        Ok(ThreadParallel {
            pool,
            threads,
            chunk_size,
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl ExecutionStrategy for ThreadParallel {
    fn name(&self) -> &'static str {
        "thread-parallel"
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
        profiling::scope!("thread_parallel: apply");
        sites.assert_fits(field.aabb());
        if sites.is_empty() {
            return;
        }
        let sites = sites.as_slice();
        let writer = field.writer();
        let writer = &writer;
        self.pool.install(|| {
            rayon::scope(|s| {
                for chunk in sites.chunks(self.chunk_size) {
                    s.spawn(move |_| {
                        profiling::scope!("thread_parallel: task");
                        for site in chunk {
                            let values = rule.evaluate(site);
                            // Sites of a SiteSet are unique and placed
                            // inside the field, no other task writes here.
                            unsafe {
                                writer.write_site(site.coords(), &values)
                            };
                        }
                    });
                }
            });
        });
    }
}
