use crate::process::Time;
use crate::Schedule;
use serde::Serialize;

/// Aggregate statistics of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSummary {
    pub process_count: usize,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    /// Earliest arrival in the batch
    pub first_arrival: Time,
    /// Completion time of the last process
    pub makespan: Time,
    /// CPU time spent running processes
    pub busy_time: Time,
    /// CPU time spent idle between first arrival and makespan
    pub idle_time: Time,
    /// `busy_time` over the span from first arrival to makespan (0.0 - 1.0)
    pub utilization: f64,
    /// Completed processes per time unit over the same span
    pub throughput: f64,
    pub context_switches: usize,
}

impl ScheduleSummary {
    /// Compute the summary of a finished schedule
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let processes = schedule.processes();
        let timeline = schedule.timeline();
        let count = processes.len();

        // Totals in u128: each term may be close to the clock limit
        let total_turnaround: u128 = processes
            .iter()
            .filter_map(|p| p.turnaround_time())
            .map(u128::from)
            .sum();
        let total_waiting: u128 = processes
            .iter()
            .filter_map(|p| p.waiting_time())
            .map(u128::from)
            .sum();

        let first_arrival = processes.iter().map(|p| p.arrival_time()).min().unwrap_or(0);
        let makespan = timeline.end().unwrap_or(first_arrival);
        let span = makespan.saturating_sub(first_arrival);
        let busy_time = timeline.busy_time();

        Self {
            process_count: count,
            average_turnaround: mean(total_turnaround, count),
            average_waiting: mean(total_waiting, count),
            first_arrival,
            makespan,
            busy_time,
            idle_time: span.saturating_sub(busy_time),
            utilization: ratio(busy_time as f64, span),
            throughput: ratio(count as f64, span),
            context_switches: timeline.context_switches(),
        }
    }
}

fn mean(total: u128, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn ratio(value: f64, span: Time) -> f64 {
    if span == 0 {
        0.0
    } else {
        value / span as f64
    }
}
