use super::{Schedule, SchedulingPolicy, Timeline};
use crate::process::Time;
use crate::Process;
use std::collections::VecDeque;
use std::num::NonZeroU64;
use tracing::{debug, trace};

/// Preemptive Round-Robin simulator.
///
/// Processes take turns from a FIFO ready queue, each turn lasting at most
/// one quantum. After every slice, processes that arrived in the meantime
/// are admitted in index order, and only then is the preempted process put
/// back at the tail.
///
/// The queue is seeded with every process sharing the earliest arrival
/// time, and the clock starts at that arrival. When the queue drains while
/// work is still outstanding the clock skips ahead to the next arrival.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

/// Mutable state of one Round-Robin run
struct ReadyState {
    queue: VecDeque<usize>,
    remaining: Vec<Time>,
    enqueued: Vec<bool>,
    clock: Time,
}

impl ReadyState {
    fn new(processes: &[Process]) -> Self {
        Self {
            queue: VecDeque::with_capacity(processes.len()),
            remaining: processes.iter().map(Process::burst_time).collect(),
            enqueued: vec![false; processes.len()],
            clock: 0,
        }
    }

    /// Enqueue, in index order, every waiting process that has arrived by now
    fn admit(&mut self, processes: &[Process], skip: Option<usize>) {
        for (i, process) in processes.iter().enumerate() {
            if Some(i) == skip || self.enqueued[i] || self.remaining[i] == 0 {
                continue;
            }
            if process.arrival_time() <= self.clock {
                trace!(pid = process.id(), clock = self.clock, "admitted to ready queue");
                self.queue.push_back(i);
                self.enqueued[i] = true;
            }
        }
    }

    /// Earliest arrival among processes never admitted
    fn next_arrival(&self, processes: &[Process]) -> Option<Time> {
        processes
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.enqueued[i] && self.remaining[i] > 0)
            .map(|(_, p)| p.arrival_time())
            .min()
    }
}

impl RoundRobinScheduler {
    /// Create a new round robin scheduler
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    /// Get time quantum
    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }

    /// Simulate the batch. The input is left untouched.
    pub fn run(&self, processes: &[Process]) -> Schedule {
        let mut out: Vec<Process> = processes.iter().map(Process::fresh).collect();
        let mut timeline = Timeline::new();
        let mut state = ReadyState::new(processes);
        let quantum = self.quantum.get();

        if let Some(first) = state.next_arrival(processes) {
            state.clock = first;
            state.admit(processes, None);
        }

        loop {
            let Some(idx) = state.queue.pop_front() else {
                match state.next_arrival(processes) {
                    Some(arrival) => {
                        trace!(from = state.clock, to = arrival, "CPU idle");
                        state.clock = arrival;
                        state.admit(processes, None);
                        continue;
                    }
                    None => break,
                }
            };

            let slice = state.remaining[idx].min(quantum);
            let start = state.clock;
            state.clock += slice;
            state.remaining[idx] -= slice;
            timeline.record(out[idx].id(), start, state.clock);

            if state.remaining[idx] == 0 {
                out[idx].complete_at(state.clock);
                debug!(pid = out[idx].id(), completion = state.clock, "process finished");
            } else {
                trace!(
                    pid = out[idx].id(),
                    remaining = state.remaining[idx],
                    clock = state.clock,
                    "process preempted"
                );
            }

            state.admit(processes, Some(idx));

            if state.remaining[idx] > 0 {
                state.queue.push_back(idx);
            }
        }

        debug_assert!(state.remaining.iter().all(|&r| r == 0));

        Schedule::new(SchedulingPolicy::round_robin(self.quantum), out, timeline)
    }
}
