use schedsim::prelude::*;
use schedsim::report::{render_averages, render_gantt, render_table};

fn idle_batch() -> Schedule {
    let processes = vec![
        Process::new(1, 0, 2, 0).unwrap(),
        Process::new(2, 10, 3, 0).unwrap(),
    ];
    simulate(&processes, PolicyType::Fcfs, None).unwrap()
}

#[test]
fn table_has_header_and_one_row_per_process() {
    let table = render_table(&idle_batch());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Process no.\tArrival Time\tBurst Time\tCompletion Time\t\tTurnaround Time\t\tWaiting Time"
    );
    assert_eq!(lines[1], "1\t\t0\t\t2\t\t2\t\t\t2\t\t\t0");
    assert_eq!(lines[2], "2\t\t10\t\t3\t\t13\t\t\t3\t\t\t0");
}

#[test]
fn gantt_shows_idle_gaps() {
    assert_eq!(render_gantt(&idle_batch()), "| P1 0-2 | idle 2-10 | P2 10-13 |");
    assert_eq!(render_gantt(&simulate(&[], PolicyType::Fcfs, None).unwrap()), "");
}

#[test]
fn summary_of_idle_batch() {
    let summary = idle_batch().summary();

    assert_eq!(summary.process_count, 2);
    assert_eq!(summary.first_arrival, 0);
    assert_eq!(summary.makespan, 13);
    assert_eq!(summary.busy_time, 5);
    assert_eq!(summary.idle_time, 8);
    assert_eq!(summary.context_switches, 1);
    assert!((summary.average_turnaround - 2.5).abs() < 1e-9);
    assert_eq!(summary.average_waiting, 0.0);
    assert!((summary.utilization - 5.0 / 13.0).abs() < 1e-9);
    assert!((summary.throughput - 2.0 / 13.0).abs() < 1e-9);
}

#[test]
fn summary_of_round_robin() {
    let processes = vec![
        Process::new(1, 0, 4, 0).unwrap(),
        Process::new(2, 0, 3, 0).unwrap(),
    ];
    let schedule = simulate(&processes, PolicyType::RoundRobin, Some(2)).unwrap();
    let summary = schedule.summary();

    assert_eq!(summary.makespan, 7);
    assert_eq!(summary.idle_time, 0);
    assert_eq!(summary.context_switches, 3);
    assert!((summary.average_waiting - 3.0).abs() < 1e-9);
    assert!((summary.utilization - 1.0).abs() < 1e-9);

    let averages = render_averages(&schedule);
    assert!(averages.contains("Average waiting time: 3.00"));
    assert!(averages.contains("CPU utilization: 100.0%"));
}

#[test]
fn empty_summary_is_zeroed() {
    let summary = simulate(&[], PolicyType::Sjf, None).unwrap().summary();

    assert_eq!(summary.process_count, 0);
    assert_eq!(summary.makespan, 0);
    assert_eq!(summary.utilization, 0.0);
    assert_eq!(summary.average_turnaround, 0.0);
}

#[test]
fn json_export_round_trips_through_serde() {
    let schedule = idle_batch();
    let json = ScheduleExporter::new(&schedule).export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["policy"], "FCFS");
    assert!(value["quantum"].is_null());
    assert_eq!(value["processes"][1]["completion_time"], 13);
    assert_eq!(value["processes"][1]["waiting_time"], 0);
    assert_eq!(value["timeline"].as_array().unwrap().len(), 2);
    assert_eq!(value["timeline"][1]["start"], 10);
    assert_eq!(value["summary"]["makespan"], 13);
}

#[test]
fn schedule_serializes_with_flattened_timings() {
    let value = serde_json::to_value(idle_batch()).unwrap();

    assert_eq!(value["processes"][0]["id"], 1);
    assert_eq!(value["processes"][0]["completion_time"], 2);
    assert_eq!(value["policy"]["policy_type"], "fcfs");
    assert_eq!(value["policy"]["discipline"]["kind"], "non_preemptive");
}
