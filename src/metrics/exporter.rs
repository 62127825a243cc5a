use crate::Schedule;

/// Exports finished schedules for other tools
pub struct ScheduleExporter<'a> {
    schedule: &'a Schedule,
}

impl<'a> ScheduleExporter<'a> {
    /// Create a new exporter
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Export policy, processes, timeline and summary as JSON
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        let schedule = self.schedule;
        let processes: Vec<serde_json::Value> = schedule
            .processes()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id(),
                    "arrival_time": p.arrival_time(),
                    "burst_time": p.burst_time(),
                    "priority": p.priority(),
                    "completion_time": p.completion_time(),
                    "turnaround_time": p.turnaround_time(),
                    "waiting_time": p.waiting_time(),
                })
            })
            .collect();

        let export = serde_json::json!({
            "policy": schedule.policy().to_string(),
            "quantum": schedule.policy().quantum().map(|q| q.get()),
            "processes": processes,
            "timeline": schedule.timeline().slices(),
            "summary": schedule.summary(),
        });

        serde_json::to_string_pretty(&export)
    }

    /// Get the schedule being exported
    pub fn schedule(&self) -> &Schedule {
        self.schedule
    }
}
