//! Scheduling disciplines and the simulators that run them

/// Scheduler facade
pub mod engine;
/// Run-to-completion simulator (FCFS, SJF, Priority)
pub mod non_preemptive;
/// Ordering policies for the non-preemptive simulator
pub mod ordering;
/// Discipline selection and validation
pub mod policy;
/// Round-Robin simulator
pub mod round_robin;
/// Simulation results
pub mod schedule;
/// Execution timeline
pub mod timeline;

pub use engine::{simulate, Scheduler};
pub use non_preemptive::NonPreemptiveScheduler;
pub use ordering::OrderingPolicy;
pub use policy::{Discipline, PolicyType, SchedulingPolicy};
pub use round_robin::RoundRobinScheduler;
pub use schedule::Schedule;
pub use timeline::{Slice, Timeline};
