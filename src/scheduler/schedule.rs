use super::{SchedulingPolicy, Timeline};
use crate::metrics::ScheduleSummary;
use crate::Process;
use serde::Serialize;

/// Result of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    policy: SchedulingPolicy,
    processes: Vec<Process>,
    timeline: Timeline,
}

impl Schedule {
    pub(crate) fn new(policy: SchedulingPolicy, processes: Vec<Process>, timeline: Timeline) -> Self {
        Self {
            policy,
            processes,
            timeline,
        }
    }

    /// Get the policy that produced this schedule
    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Annotated processes, in input order
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Get execution timeline
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Look up a process by id
    pub fn get(&self, id: usize) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Process ids in the order they finished
    pub fn completion_order(&self) -> Vec<usize> {
        let mut finished: Vec<&Process> = self.processes.iter().filter(|p| p.is_complete()).collect();
        finished.sort_by_key(|p| p.completion_time());
        finished.into_iter().map(Process::id).collect()
    }

    /// Aggregate metrics for this run
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_schedule(self)
    }

    /// Take the annotated processes
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }
}
