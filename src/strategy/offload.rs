use super::*;
use rayon::prelude::*;

/// Host/device offload.
///
/// Sites are uploaded into a device resident copy, each work item
/// computes its components into its own slot of a device value buffer,
/// and the host copies the values back into the field before returning.
/// Work items share nothing, so the device pass needs no atomics.
/// The device is a dedicated thread pool.
#[derive(Debug)]
pub struct Offload {
    device: rayon::ThreadPool,
    threads: usize,
    work_group_size: usize,
}

impl Offload {
    pub fn new(
        threads: usize,
        work_group_size: usize,
    ) -> Result<Self, BoundaryError> {
        require_nonzero("threads", threads)?;
        require_nonzero("work_group_size", work_group_size)?;
        let device = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("offload_device_{}", i))
            .build()?;
        Ok(Offload {
            device,
            threads,
            work_group_size,
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn work_group_size(&self) -> usize {
        self.work_group_size
    }
}

impl ExecutionStrategy for Offload {
    fn name(&self) -> &'static str {
        "offload"
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
        profiling::scope!("offload: apply");
        sites.assert_fits(field.aabb());
        if sites.is_empty() || GRID_DIMENSION == 0 {
            return;
        }

        let device_sites = {
            profiling::scope!("offload: upload");
            sites.as_slice().to_vec()
        };
        let mut device_values = vec![0.0; device_sites.len() * GRID_DIMENSION];

        let group = self.work_group_size;
        self.device.install(|| {
            device_values
                .par_chunks_mut(group * GRID_DIMENSION)
                .zip(device_sites.par_chunks(group))
                .for_each(|(slots, items)| {
                    profiling::scope!("offload: work group");
                    for (slot, site) in
                        slots.chunks_exact_mut(GRID_DIMENSION).zip(items)
                    {
                        slot.copy_from_slice(&rule.evaluate(site));
                    }
                });
        });

        profiling::scope!("offload: download");
        for (site, values) in device_sites
            .iter()
            .zip(device_values.chunks_exact(GRID_DIMENSION))
        {
            field.set_site(site.coords(), values);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::error::BoundaryClass;

    #[test]
    fn offload_test() {
        for (threads, group) in [(1, 1), (2, 3), (4, 256), (3, 100000)] {
            test_util::check_against_loop(
                &Offload::new(threads, group).unwrap(),
            );
        }
    }

    #[test]
    fn ragged_last_group_test() {
        // 5 sites in groups of 2, last group holds one item
        let functions: UpdateFunctions<1> =
            [update_function(|t, p: &BoundaryPoint<1>| {
                t + p.coord(0) as f64
            })];
        let sites: Vec<_> = (0..5).map(|x| BoundaryPoint::new([x])).collect();
        let sites = SiteSet::new(BoundaryClass::Inlet, sites).unwrap();
        let mut field = VelocityField::from_extents([6]);
        let placed = sites.place(field.aabb()).unwrap();
        let offload = Offload::new(2, 2).unwrap();
        offload.apply(&placed, &SiteRule::new(&functions, 10.0), &mut field);
        assert_eq!(field.buffer(), &[10.0, 11.0, 12.0, 13.0, 14.0, 0.0]);
    }

    #[test]
    fn invalid_parameters_test() {
        assert!(Offload::new(0, 4).is_err());
        assert!(Offload::new(4, 0).is_err());
    }
}
