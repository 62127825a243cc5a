//! Offline CPU scheduling simulator.
//!
//! Simulates FCFS, SJF, Priority and Round-Robin scheduling over a fixed
//! batch of processes and computes completion, turnaround and waiting
//! time for each of them.

#![allow(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod metrics;
pub mod process;
pub mod report;
pub mod scheduler;

/// Prelude for convenient imports
pub mod prelude;

// Re-exports
pub use config::SimulationConfig;
pub use error::{SchedulerError, SchedulerResult};
pub use process::{Process, ProcessSpec};
pub use scheduler::{simulate, PolicyType, Schedule, Scheduler, SchedulingPolicy};
