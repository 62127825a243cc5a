use crate::process::Time;
use serde::Serialize;

/// One uninterrupted stretch of CPU time granted to one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub process_id: usize,
    pub start: Time,
    pub end: Time,
}

impl Slice {
    /// Length of the slice
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered record of every slice a simulation handed out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Record a slice. Slices must be appended in time order.
    pub fn record(&mut self, process_id: usize, start: Time, end: Time) {
        debug_assert!(end > start, "empty slice for P{}", process_id);
        debug_assert!(self.slices.last().map_or(true, |last| last.end <= start));

        self.slices.push(Slice {
            process_id,
            start,
            end,
        });
    }

    /// Get all slices
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Get number of slices
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Check if no slice was recorded
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Number of slices given to a process
    pub fn visits(&self, process_id: usize) -> usize {
        self.slices
            .iter()
            .filter(|slice| slice.process_id == process_id)
            .count()
    }

    /// Total CPU time handed out
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Start of the first slice
    pub fn start(&self) -> Option<Time> {
        self.slices.first().map(|slice| slice.start)
    }

    /// End of the last slice
    pub fn end(&self) -> Option<Time> {
        self.slices.last().map(|slice| slice.end)
    }

    /// Idle gaps between consecutive slices, as `(start, end)` pairs
    pub fn idle_gaps(&self) -> Vec<(Time, Time)> {
        self.slices
            .windows(2)
            .filter(|pair| pair[1].start > pair[0].end)
            .map(|pair| (pair[0].end, pair[1].start))
            .collect()
    }

    /// Number of times the CPU passed from one process to another
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count()
    }
}
