use schedsim::prelude::*;
use std::io::Cursor;

fn run_session(input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
    console.run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn quits_on_zero() {
    let output = run_session("0\n");

    assert!(output.contains("Welcome Dear Programmer!"));
    assert!(output.contains("Enter number of processes (Enter 0 to quit): "));
    assert!(output.contains("Exiting the program."));
}

#[test]
fn fcfs_round_prints_table() {
    let output = run_session("2\n0 5 1\n1 3 2\n1\n0\n");

    assert!(output.contains("Enter arrival time, burst time, and priority for process 1: "));
    assert!(output.contains("Enter arrival time, burst time, and priority for process 2: "));
    assert!(output.contains("4. Round-Robin"));
    assert!(output.contains("Process no.\tArrival Time\tBurst Time"));
    assert!(output.contains("1\t\t0\t\t5\t\t5\t\t\t5\t\t\t0\n"));
    assert!(output.contains("2\t\t1\t\t3\t\t8\t\t\t7\t\t\t4\n"));
    assert!(output.contains("| P1 0-5 | P2 5-8 |"));
    assert!(output.ends_with("Exiting the program.\n"));
}

#[test]
fn round_robin_asks_for_quantum() {
    // Values may share a line, as with a terminal
    let output = run_session("2 0 4 0 0 3 0 4 2 0");

    assert!(output.contains("Enter time quantum for Round-Robin: "));
    assert!(output.contains("1\t\t0\t\t4\t\t6\t\t\t6\t\t\t2\n"));
    assert!(output.contains("2\t\t0\t\t3\t\t7\t\t\t7\t\t\t4\n"));
}

#[test]
fn invalid_choice_restarts_round() {
    let output = run_session("1\n0 2 0\n9\n1\n0 2 0\n2\n0\n");

    assert!(output.contains("Invalid choice!"));
    assert_eq!(output.matches("Process no.").count(), 1);
    assert!(output.contains("Exiting the program."));
}

#[test]
fn invalid_process_is_reported() {
    let output = run_session("1\n-1 2 0\n0\n");

    assert!(output.contains("Invalid process P1: arrival time -1 is negative"));
    assert!(!output.contains("Choose scheduling algorithm"));
    assert!(output.contains("Exiting the program."));
}

#[test]
fn invalid_quantum_is_reported() {
    let output = run_session("1\n0 2 0\n4\n0\n0\n");

    assert!(output.contains("Invalid time quantum: 0"));
    assert!(!output.contains("Process no."));
    assert!(output.contains("Exiting the program."));
}

#[test]
fn end_of_input_ends_session() {
    let output = run_session("");
    assert!(output.contains("Welcome Dear Programmer!"));
    assert!(!output.contains("Exiting the program."));

    let output = run_session("2\n0 5 1\n");
    assert!(!output.contains("Process no."));
}

#[test]
fn non_numeric_input_ends_session() {
    let output = run_session("three\n");
    assert!(!output.contains("Exiting the program."));
}
