//! src/dispatch/router.rs
//!
//! Strided row-ownership routing.
//!
//! Worker with 0-based index `t` owns rows `{t, t+k, t+2k, ...}` where the
//! stride `k` is the number of *active* workers for the run, not the pool
//! size. Every row is owned by exactly one worker and owners visit their
//! rows in increasing order. Using the active count as the stride balances
//! rows as evenly as possible across however many workers were activated.
//!
//! Routing is independent of the release policy: relay and staggered runs
//! partition rows exactly like simultaneous ones.

/// Deterministic strided mapping from worker index to owned rows.
#[derive(Debug, Clone, Copy)]
pub struct RowRouter {
    stride: usize,
}

impl RowRouter {
    /// Creates a router with stride equal to the active worker count.
    ///
    /// `stride` must be at least 1; with zero active workers no router is
    /// ever constructed because no worker is released.
    pub fn new(stride: usize) -> Self {
        debug_assert!(stride >= 1, "row stride must be >= 1");
        Self { stride }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Rows owned by `worker_index`, in increasing order.
    pub fn owned_rows(
        &self,
        worker_index: usize,
        task_count: usize,
    ) -> impl Iterator<Item = usize> {
        (worker_index..task_count).step_by(self.stride)
    }

    /// 0-based index of the worker that owns `row`.
    pub fn owner_of(&self, row: usize) -> usize {
        row % self.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_two_splits_odd_and_even() {
        let router = RowRouter::new(2);
        assert_eq!(router.owned_rows(0, 4).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(router.owned_rows(1, 4).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn stride_one_owns_everything() {
        let router = RowRouter::new(1);
        assert_eq!(
            router.owned_rows(0, 5).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn ownership_partitions_all_rows_exactly_once() {
        for stride in 1..=8 {
            for task_count in 0..=20 {
                let router = RowRouter::new(stride);
                let mut seen = vec![0u32; task_count];
                for worker in 0..stride {
                    for row in router.owned_rows(worker, task_count) {
                        seen[row] += 1;
                        assert_eq!(router.owner_of(row), worker);
                    }
                }
                assert!(
                    seen.iter().all(|&n| n == 1),
                    "stride {} over {} rows is not a partition: {:?}",
                    stride,
                    task_count,
                    seen
                );
            }
        }
    }

    #[test]
    fn workers_beyond_task_count_own_nothing() {
        let router = RowRouter::new(6);
        assert_eq!(router.owned_rows(4, 3).count(), 0);
    }

    #[test]
    fn owned_rows_are_increasing() {
        let router = RowRouter::new(3);
        let rows: Vec<_> = router.owned_rows(1, 17).collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
    }
}
