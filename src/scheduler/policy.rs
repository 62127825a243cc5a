use super::OrderingPolicy;
use crate::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Job-First, non-preemptive
    Sjf,
    /// Priority, non-preemptive
    Priority,
    /// Round-Robin with a fixed time quantum
    RoundRobin,
}

impl PolicyType {
    pub const ALL: [PolicyType; 4] = [
        PolicyType::Fcfs,
        PolicyType::Sjf,
        PolicyType::Priority,
        PolicyType::RoundRobin,
    ];

    /// Menu code of this discipline (1-based)
    pub fn selector(&self) -> u32 {
        match self {
            PolicyType::Fcfs => 1,
            PolicyType::Sjf => 2,
            PolicyType::Priority => 3,
            PolicyType::RoundRobin => 4,
        }
    }

    /// Ordering used by the non-preemptive simulator, if any
    pub fn ordering(&self) -> Option<OrderingPolicy> {
        match self {
            PolicyType::Fcfs => Some(OrderingPolicy::ByArrival),
            PolicyType::Sjf => Some(OrderingPolicy::ByBurst),
            PolicyType::Priority => Some(OrderingPolicy::ByPriority),
            PolicyType::RoundRobin => None,
        }
    }

    /// Check if the discipline preempts running processes
    pub fn is_preemptive(&self) -> bool {
        matches!(self, PolicyType::RoundRobin)
    }
}

impl TryFrom<u32> for PolicyType {
    type Error = SchedulerError;

    fn try_from(selector: u32) -> Result<Self, Self::Error> {
        PolicyType::ALL
            .into_iter()
            .find(|policy| policy.selector() == selector)
            .ok_or(SchedulerError::InvalidDiscipline(selector))
    }
}

impl FromStr for PolicyType {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(PolicyType::Fcfs),
            "sjf" => Ok(PolicyType::Sjf),
            "priority" => Ok(PolicyType::Priority),
            "rr" | "round_robin" | "round-robin" => Ok(PolicyType::RoundRobin),
            _ => Err(SchedulerError::UnknownDiscipline(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyType::Fcfs => "FCFS",
            PolicyType::Sjf => "SJF",
            PolicyType::Priority => "Priority",
            PolicyType::RoundRobin => "Round-Robin",
        };
        f.write_str(name)
    }
}

/// How a validated policy runs a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// Run to completion in the given order
    NonPreemptive { ordering: OrderingPolicy },
    /// Time-sliced with a fixed quantum
    RoundRobin { quantum: NonZeroU64 },
}

/// A validated scheduling policy: the discipline plus its quantum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulingPolicy {
    policy_type: PolicyType,
    discipline: Discipline,
}

impl SchedulingPolicy {
    /// Create a policy from a discipline and an optional raw quantum.
    ///
    /// Round-Robin requires a positive quantum. Other disciplines ignore it.
    pub fn new(policy_type: PolicyType, quantum: Option<i64>) -> Result<Self, SchedulerError> {
        if let Some(ordering) = policy_type.ordering() {
            return Ok(Self::ordered(policy_type, ordering));
        }

        let raw = quantum.ok_or(SchedulerError::MissingQuantum)?;
        let quantum = u64::try_from(raw)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(SchedulerError::InvalidQuantum(raw))?;

        Ok(Self::round_robin(quantum))
    }

    /// Policy from a menu selector (1-4)
    pub fn from_selector(selector: u32, quantum: Option<i64>) -> Result<Self, SchedulerError> {
        Self::new(PolicyType::try_from(selector)?, quantum)
    }

    /// Round-Robin with a known-positive quantum
    pub fn round_robin(quantum: NonZeroU64) -> Self {
        Self {
            policy_type: PolicyType::RoundRobin,
            discipline: Discipline::RoundRobin { quantum },
        }
    }

    fn ordered(policy_type: PolicyType, ordering: OrderingPolicy) -> Self {
        Self {
            policy_type,
            discipline: Discipline::NonPreemptive { ordering },
        }
    }

    pub fn fcfs() -> Self {
        Self::ordered(PolicyType::Fcfs, OrderingPolicy::ByArrival)
    }

    pub fn sjf() -> Self {
        Self::ordered(PolicyType::Sjf, OrderingPolicy::ByBurst)
    }

    pub fn priority() -> Self {
        Self::ordered(PolicyType::Priority, OrderingPolicy::ByPriority)
    }

    /// Get policy type
    pub fn policy_type(&self) -> PolicyType {
        self.policy_type
    }

    /// Get discipline
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Get the Round-Robin quantum
    pub fn quantum(&self) -> Option<NonZeroU64> {
        match self.discipline {
            Discipline::RoundRobin { quantum } => Some(quantum),
            Discipline::NonPreemptive { .. } => None,
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.discipline {
            Discipline::RoundRobin { quantum } => {
                write!(f, "{} (quantum {})", self.policy_type, quantum)
            }
            Discipline::NonPreemptive { .. } => write!(f, "{}", self.policy_type),
        }
    }
}
