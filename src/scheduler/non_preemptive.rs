use super::{OrderingPolicy, Schedule, SchedulingPolicy, Timeline};
use crate::process::Time;
use crate::Process;
use tracing::{debug, trace};

/// Run-to-completion simulator shared by FCFS, SJF and Priority.
///
/// At every decision instant the next process is the minimum, under the
/// ordering policy, of the processes that have arrived and not yet run.
/// If nothing has arrived the clock jumps to the earliest pending arrival.
#[derive(Debug, Clone, Copy)]
pub struct NonPreemptiveScheduler {
    ordering: OrderingPolicy,
}

impl NonPreemptiveScheduler {
    /// Create a new non-preemptive scheduler
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self { ordering }
    }

    /// Get ordering policy
    pub fn ordering(&self) -> OrderingPolicy {
        self.ordering
    }

    /// Simulate the batch. The input is left untouched.
    pub fn run(&self, processes: &[Process]) -> Schedule {
        let mut out: Vec<Process> = processes.iter().map(Process::fresh).collect();
        let mut timeline = Timeline::new();
        let mut pending: Vec<usize> = (0..out.len()).collect();
        let mut clock: Time = 0;

        while !pending.is_empty() {
            let next = self.pick(&out, &pending, clock);
            let idx = pending.remove(next);
            let process = &mut out[idx];

            if clock < process.arrival_time() {
                trace!(from = clock, to = process.arrival_time(), "CPU idle");
                clock = process.arrival_time();
            }

            let start = clock;
            clock += process.burst_time();
            timeline.record(process.id(), start, clock);
            process.complete_at(clock);

            debug!(
                pid = process.id(),
                start,
                completion = clock,
                "{:?} dispatched process",
                self.ordering
            );
        }

        Schedule::new(self.policy(), out, timeline)
    }

    /// Position in `pending` of the process to run next
    fn pick(&self, processes: &[Process], pending: &[usize], clock: Time) -> usize {
        let earliest = pending
            .iter()
            .map(|&i| processes[i].arrival_time())
            .min()
            .unwrap_or(clock);
        let horizon = clock.max(earliest);

        // min_by keeps the first of equal elements, so ties fall back to input order
        pending
            .iter()
            .enumerate()
            .filter(|&(_, &i)| processes[i].arrival_time() <= horizon)
            .min_by(|&(_, &a), &(_, &b)| self.ordering.compare(&processes[a], &processes[b]))
            .map(|(pos, _)| pos)
            .unwrap_or(0)
    }

    fn policy(&self) -> SchedulingPolicy {
        match self.ordering {
            OrderingPolicy::ByArrival => SchedulingPolicy::fcfs(),
            OrderingPolicy::ByBurst => SchedulingPolicy::sjf(),
            OrderingPolicy::ByPriority => SchedulingPolicy::priority(),
        }
    }
}
