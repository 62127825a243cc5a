use crate::SchedulerError;
use serde::{Deserialize, Serialize};

/// Simulated time, in abstract ticks
pub type Time = u64;

/// Largest accepted arrival or burst time.
///
/// Keeps every clock value of a batch within `Time`: with each input at most
/// `u32::MAX`, a batch would need more than `u32::MAX` processes to overflow.
pub const MAX_TIME: Time = u32::MAX as Time;

/// Computed timings of a process that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timing {
    /// Instant the process finished its last slice
    pub completion_time: Time,
    /// `completion_time - arrival_time`
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`
    pub waiting_time: Time,
}

/// A process in a simulated batch.
///
/// Arrival, burst and priority are fixed at construction. The computed
/// timings start out unset and are filled in by a simulator on a copy of
/// the record, never on the caller's input.
///
/// Priorities follow the "lower number wins" convention: a process with
/// priority 0 is served before one with priority 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    id: usize,
    arrival_time: Time,
    burst_time: Time,
    priority: i64,
    #[serde(flatten)]
    timing: Option<Timing>,
}

impl Process {
    /// Create a validated process.
    ///
    /// Rejects a negative arrival time, a burst time that is not positive,
    /// and either one above [`MAX_TIME`].
    pub fn new(
        id: usize,
        arrival_time: i64,
        burst_time: i64,
        priority: i64,
    ) -> Result<Self, SchedulerError> {
        let invalid = |reason: String| SchedulerError::InvalidProcess { id, reason };

        let arrival_time = match Time::try_from(arrival_time) {
            Ok(arrival) if arrival <= MAX_TIME => arrival,
            Ok(_) => {
                return Err(invalid(format!(
                    "arrival time {} exceeds {}",
                    arrival_time, MAX_TIME
                )))
            }
            Err(_) => return Err(invalid(format!("arrival time {} is negative", arrival_time))),
        };

        let burst_time = match Time::try_from(burst_time) {
            Ok(0) | Err(_) => {
                return Err(invalid(format!("burst time {} is not positive", burst_time)))
            }
            Ok(burst) if burst > MAX_TIME => {
                return Err(invalid(format!("burst time {} exceeds {}", burst_time, MAX_TIME)))
            }
            Ok(burst) => burst,
        };

        Ok(Self {
            id,
            arrival_time,
            burst_time,
            priority,
            timing: None,
        })
    }

    /// Get id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get arrival time
    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    /// Get burst time
    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    /// Get priority (lower value = served first)
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Get computed timings, if a run has completed this process
    pub fn timing(&self) -> Option<&Timing> {
        self.timing.as_ref()
    }

    /// Get completion time, if set
    pub fn completion_time(&self) -> Option<Time> {
        self.timing.map(|t| t.completion_time)
    }

    /// Get turnaround time, if set
    pub fn turnaround_time(&self) -> Option<Time> {
        self.timing.map(|t| t.turnaround_time)
    }

    /// Get waiting time, if set
    pub fn waiting_time(&self) -> Option<Time> {
        self.timing.map(|t| t.waiting_time)
    }

    /// Check if the process has computed timings
    pub fn is_complete(&self) -> bool {
        self.timing.is_some()
    }

    /// Copy of this record with the computed fields cleared
    pub(crate) fn fresh(&self) -> Self {
        Self {
            timing: None,
            ..self.clone()
        }
    }

    /// Record completion and derive turnaround and waiting time.
    ///
    /// Callers guarantee `completion_time >= arrival_time + burst_time`.
    pub(crate) fn complete_at(&mut self, completion_time: Time) {
        debug_assert!(self.timing.is_none(), "P{} completed twice", self.id);
        debug_assert!(completion_time >= self.arrival_time + self.burst_time);

        let turnaround_time = completion_time - self.arrival_time;
        self.timing = Some(Timing {
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - self.burst_time,
        });
    }
}

/// Raw, unvalidated process description as read from input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: i64,
}

impl ProcessSpec {
    /// Create a new process spec
    pub fn new(arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
            priority,
        }
    }

    /// Validate into a process with the given id
    pub fn into_process(self, id: usize) -> Result<Process, SchedulerError> {
        Process::new(id, self.arrival_time, self.burst_time, self.priority)
    }
}

/// Validate a batch of specs, assigning 1-based ids in input order.
///
/// The first invalid entry aborts the whole batch.
pub fn build_batch(specs: &[ProcessSpec]) -> Result<Vec<Process>, SchedulerError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| spec.into_process(index + 1))
        .collect()
}
