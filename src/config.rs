use crate::process::{build_batch, ProcessSpec};
use crate::{PolicyType, Process, Scheduler, SchedulerError, SchedulingPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Tab-separated table, Gantt line and averages
    #[default]
    Table,
    /// Pretty-printed JSON export
    Json,
}

/// Batch simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling discipline
    pub policy: PolicyType,

    /// Time quantum, required for Round-Robin
    #[serde(default)]
    pub quantum: Option<i64>,

    /// Processes in input order; ids are assigned from 1
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

impl SimulationConfig {
    /// Create a new configuration with no processes
    pub fn new(policy: PolicyType) -> Self {
        Self {
            policy,
            quantum: None,
            processes: Vec::new(),
            output: OutputFormat::Table,
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, SchedulerError> {
        serde_json::from_str(json).map_err(|e| SchedulerError::ConfigError(e.to_string()))
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchedulerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents).map_err(|e| match e {
            SchedulerError::ConfigError(msg) => {
                SchedulerError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Set policy
    pub fn with_policy(mut self, policy: PolicyType) -> Self {
        self.policy = policy;
        self
    }

    /// Set quantum
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Add a process
    pub fn with_process(mut self, arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        self.processes
            .push(ProcessSpec::new(arrival_time, burst_time, priority));
        self
    }

    /// Set output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Validate the policy and quantum
    pub fn scheduling_policy(&self) -> Result<SchedulingPolicy, SchedulerError> {
        SchedulingPolicy::new(self.policy, self.quantum)
    }

    /// Validate the processes
    pub fn build_processes(&self) -> Result<Vec<Process>, SchedulerError> {
        build_batch(&self.processes)
    }

    /// Validate everything and build a ready-to-run scheduler and batch
    pub fn build(&self) -> Result<(Scheduler, Vec<Process>), SchedulerError> {
        let scheduler = Scheduler::new(self.scheduling_policy()?);
        let processes = self.build_processes()?;
        Ok((scheduler, processes))
    }
}
