use super::{
    Discipline, NonPreemptiveScheduler, PolicyType, RoundRobinScheduler, Schedule,
    SchedulingPolicy,
};
use crate::{Process, SchedulerError};
use tracing::info;

/// Scheduler facade: dispatches a batch to the simulator for its policy
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    policy: SchedulingPolicy,
}

impl Scheduler {
    /// Create a new scheduler
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self { policy }
    }

    /// Scheduler for a menu selector (1-4) and optional quantum
    pub fn from_selector(selector: u32, quantum: Option<i64>) -> Result<Self, SchedulerError> {
        SchedulingPolicy::from_selector(selector, quantum).map(Self::new)
    }

    /// Get scheduling policy
    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Simulate the batch under this scheduler's policy
    pub fn run(&self, processes: &[Process]) -> Schedule {
        info!(policy = %self.policy, processes = processes.len(), "Running simulation");

        let schedule = match self.policy.discipline() {
            Discipline::NonPreemptive { ordering } => {
                NonPreemptiveScheduler::new(ordering).run(processes)
            }
            Discipline::RoundRobin { quantum } => RoundRobinScheduler::new(quantum).run(processes),
        };

        info!(
            policy = %self.policy,
            makespan = schedule.timeline().end().unwrap_or(0),
            slices = schedule.timeline().len(),
            "Simulation complete"
        );
        schedule
    }
}

/// Simulate a batch under the given discipline.
///
/// `quantum` is required for Round-Robin and ignored otherwise. Errors are
/// returned before any process is touched.
pub fn simulate(
    processes: &[Process],
    policy_type: PolicyType,
    quantum: Option<i64>,
) -> Result<Schedule, SchedulerError> {
    let policy = SchedulingPolicy::new(policy_type, quantum)?;
    Ok(Scheduler::new(policy).run(processes))
}
