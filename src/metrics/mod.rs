//! Schedule metrics and export

/// Schedule exporter
pub mod exporter;
/// Aggregate schedule statistics
pub mod summary;

pub use exporter::ScheduleExporter;
pub use summary::ScheduleSummary;
