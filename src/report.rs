//! Text rendering of finished schedules

use crate::process::Time;
use crate::Schedule;

const HEADER: &str =
    "Process no.\tArrival Time\tBurst Time\tCompletion Time\t\tTurnaround Time\t\tWaiting Time";

/// Render the per-process table, one row per process in input order
pub fn render_table(schedule: &Schedule) -> String {
    let mut out = String::with_capacity(64 * (schedule.processes().len() + 1));
    out.push_str(HEADER);
    out.push('\n');

    for process in schedule.processes() {
        out.push_str(&format!(
            "{}\t\t{}\t\t{}\t\t{}\t\t\t{}\t\t\t{}\n",
            process.id(),
            process.arrival_time(),
            process.burst_time(),
            cell(process.completion_time()),
            cell(process.turnaround_time()),
            cell(process.waiting_time()),
        ));
    }

    out
}

/// Render the timeline as a single Gantt line, idle gaps included
pub fn render_gantt(schedule: &Schedule) -> String {
    let mut out = String::new();
    let mut cursor: Option<Time> = None;

    for slice in schedule.timeline().slices() {
        if let Some(end) = cursor.filter(|&end| end < slice.start) {
            out.push_str(&format!("| idle {}-{} ", end, slice.start));
        }
        out.push_str(&format!("| P{} {}-{} ", slice.process_id, slice.start, slice.end));
        cursor = Some(slice.end);
    }

    if !out.is_empty() {
        out.push('|');
    }
    out
}

/// Render the averages line printed under the table
pub fn render_averages(schedule: &Schedule) -> String {
    let summary = schedule.summary();
    format!(
        "Average turnaround time: {:.2}\tAverage waiting time: {:.2}\tCPU utilization: {:.1}%",
        summary.average_turnaround,
        summary.average_waiting,
        summary.utilization * 100.0
    )
}

fn cell(value: Option<Time>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
