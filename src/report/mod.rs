//! Simulation reports.
//!
//! A [`Report`] bundles everything derived from a finished run: the
//! completed processes, the execution timeline, a name-ordered
//! per-process table, and aggregate metrics. It renders as plain text
//! (via `Display`) or JSON.
//!
//! # Text layout
//!
//! ```text
//! --- Running FCFS Simulation ---
//!
//! --- Simulation Results ---
//!
//! Gantt Chart:
//! |  P1  |  P2  |
//! 0      5      8
//!
//! Process Details:
//! ...
//! ```

mod metrics;
mod timeline;

pub use metrics::ScheduleMetrics;
pub use timeline::{Segment, Timeline};

use serde::Serialize;
use std::fmt;

use crate::dispatching::Algorithm;
use crate::models::{CompletedProcess, Tick};
use crate::simulation::SimulationOutcome;

const TABLE_RULE: usize = 80;
const METRICS_RULE: usize = 35;

/// One row of the per-process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    /// Process name.
    pub name: String,
    /// Arrival tick.
    pub arrival: Tick,
    /// Burst length in ticks.
    pub burst: Tick,
    /// Priority number (lower runs first).
    pub priority: i64,
    /// Completion tick.
    pub finish: Tick,
    /// `finish - arrival`.
    pub turnaround: Tick,
    /// `turnaround - burst`.
    pub wait: Tick,
}

impl From<&CompletedProcess> for ProcessRow {
    fn from(c: &CompletedProcess) -> Self {
        let p = c.process();
        Self {
            name: p.name.clone(),
            arrival: p.arrival,
            burst: p.burst,
            priority: p.priority,
            finish: c.finish_time(),
            turnaround: c.turnaround_time(),
            wait: c.wait_time(),
        }
    }
}

/// Everything the reporter shows about one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Algorithm that was simulated.
    pub algorithm: Algorithm,
    /// Completed processes in finish order.
    pub completed: Vec<CompletedProcess>,
    /// Dispatch intervals with idle gaps.
    pub timeline: Timeline,
    /// Per-process rows sorted by name.
    pub table: Vec<ProcessRow>,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl Report {
    /// Derives the report from a simulation outcome.
    pub fn from_outcome(outcome: SimulationOutcome) -> Self {
        let timeline = Timeline::from_completed(&outcome.completed);
        let metrics = ScheduleMetrics::calculate(&outcome.completed);

        let mut table: Vec<ProcessRow> = outcome.completed.iter().map(ProcessRow::from).collect();
        table.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            algorithm: outcome.algorithm,
            completed: outcome.completed,
            timeline,
            table,
            metrics,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(TABLE_RULE);
        writeln!(f, "Process Details:")?;
        writeln!(f, "{rule}")?;
        write_row(
            f,
            ["Name", "Arrival", "Burst", "Priority", "Finish", "Turnaround", "Wait Time"],
        )?;
        writeln!(f, "{rule}")?;
        for row in &self.table {
            write_row(
                f,
                [
                    row.name.as_str(),
                    &row.arrival.to_string(),
                    &row.burst.to_string(),
                    &row.priority.to_string(),
                    &row.finish.to_string(),
                    &row.turnaround.to_string(),
                    &row.wait.to_string(),
                ],
            )?;
        }
        writeln!(f, "{rule}")
    }

    fn write_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;
        writeln!(f, "Performance Metrics:")?;
        writeln!(f, "  Average Waiting Time:      {:.2}", m.avg_wait_time)?;
        writeln!(f, "  Average Turnaround Time:   {:.2}", m.avg_turnaround_time)?;
        writeln!(f, "  CPU Utilization:           {:.2}%", m.cpu_utilization)?;
        writeln!(f, "{}", "-".repeat(METRICS_RULE))
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: [&str; 7]) -> fmt::Result {
    let [name, arrival, burst, priority, finish, turnaround, wait] = cells;
    let line = format!(
        "{name:<10} {arrival:<10} {burst:<10} {priority:<10} {finish:<10} {turnaround:<15} {wait:<10}"
    );
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- Running {} Simulation ---",
            self.algorithm.keyword().to_ascii_uppercase()
        )?;

        if self.completed.is_empty() {
            writeln!(f)?;
            return writeln!(f, "No processes were completed in the given time frame.");
        }

        writeln!(f)?;
        writeln!(f, "--- Simulation Results ---")?;
        writeln!(f)?;
        writeln!(f, "Gantt Chart:")?;
        let (bars, axis) = self.timeline.gantt();
        writeln!(f, "{bars}")?;
        writeln!(f, "{axis}")?;
        writeln!(f)?;
        self.write_table(f)?;
        writeln!(f)?;
        self.write_metrics(f)
    }
}
