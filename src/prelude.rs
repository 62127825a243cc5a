//! Prelude for convenient imports

// Processes
pub use crate::process::{build_batch, Process, ProcessSpec, Time, Timing, MAX_TIME};

// Scheduler
pub use crate::scheduler::{
    simulate, Discipline, NonPreemptiveScheduler, OrderingPolicy, PolicyType,
    RoundRobinScheduler, Schedule, Scheduler, SchedulingPolicy, Slice, Timeline,
};

// Metrics
pub use crate::metrics::{ScheduleExporter, ScheduleSummary};

// Config
pub use crate::config::{OutputFormat, SimulationConfig};

// Console
pub use crate::console::Console;

// Error
pub use crate::{SchedulerError, SchedulerResult};
