use crate::Process;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Order in which a non-preemptive simulator serves ready processes.
///
/// Every policy breaks remaining ties by input order: the simulator keeps
/// the first of several equal candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Arrival time ascending (FCFS)
    ByArrival,
    /// Burst time ascending, then arrival time (SJF)
    ByBurst,
    /// Priority ascending, then arrival time (Priority)
    ByPriority,
}

impl OrderingPolicy {
    /// Compare two processes under this policy
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        match self {
            OrderingPolicy::ByArrival => a.arrival_time().cmp(&b.arrival_time()),
            OrderingPolicy::ByBurst => a
                .burst_time()
                .cmp(&b.burst_time())
                .then_with(|| a.arrival_time().cmp(&b.arrival_time())),
            OrderingPolicy::ByPriority => a
                .priority()
                .cmp(&b.priority())
                .then_with(|| a.arrival_time().cmp(&b.arrival_time())),
        }
    }

    /// Stable linearization of a whole batch, as indices into `processes`
    pub fn sorted_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        order
    }
}
