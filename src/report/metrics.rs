//! Aggregate performance metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | mean(turnaround - burst) |
//! | Average turnaround | mean(finish - arrival) |
//! | CPU utilization | sum(burst) / max(finish) × 100 |
//!
//! Averages and utilization are rounded to two decimal places. All are
//! zero when nothing completed.

use serde::Serialize;

use crate::models::{CompletedProcess, Tick};

/// Run-level metrics over the completed processes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleMetrics {
    /// Number of completed processes.
    pub completed: usize,
    /// Latest finish time (0 when empty).
    pub makespan: Tick,
    /// Sum of completed bursts.
    pub busy_time: Tick,
    /// Mean wait time.
    pub avg_wait_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Busy share of `[0, makespan)`, in percent.
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from completed processes.
    pub fn calculate(completed: &[CompletedProcess]) -> Self {
        let count = completed.len();
        let makespan = completed
            .iter()
            .map(CompletedProcess::finish_time)
            .max()
            .unwrap_or(0);
        let busy_time: Tick = completed.iter().map(|c| c.process().burst).sum();
        let total_wait: Tick = completed.iter().map(CompletedProcess::wait_time).sum();
        let total_turnaround: Tick = completed.iter().map(CompletedProcess::turnaround_time).sum();

        let mean = |total: Tick| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64 * 100.0
        };

        Self {
            completed: count,
            makespan,
            busy_time,
            avg_wait_time: round2(mean(total_wait)),
            avg_turnaround_time: round2(mean(total_turnaround)),
            cpu_utilization: round2(cpu_utilization),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dispatch, Process};

    fn done(name: &str, arrival: Tick, burst: Tick, start: Tick) -> CompletedProcess {
        Dispatch::start(Process::new(name, arrival, burst), start).complete()
    }

    #[test]
    fn test_metrics_basic() {
        // P1: wait 0, turnaround 5. P2: wait 4, turnaround 7.
        let m = ScheduleMetrics::calculate(&[done("P1", 0, 5, 0), done("P2", 1, 3, 5)]);
        assert_eq!(m.completed, 2);
        assert_eq!(m.makespan, 8);
        assert_eq!(m.busy_time, 8);
        assert!((m.avg_wait_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_with_idle() {
        // Busy 3 of 8 ticks → 37.5%
        let m = ScheduleMetrics::calculate(&[done("A", 2, 2, 2), done("B", 7, 1, 7)]);
        assert_eq!(m.makespan, 8);
        assert!((m.cpu_utilization - 37.5).abs() < 1e-10);
    }

    #[test]
    fn test_rounding() {
        // Waits 0, 1, 1 → 0.666… → 0.67
        let m = ScheduleMetrics::calculate(&[
            done("A", 0, 1, 0),
            done("B", 0, 1, 1),
            done("C", 1, 1, 2),
        ]);
        assert!((m.avg_wait_time - 0.67).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&[]);
        assert_eq!(m.completed, 0);
        assert_eq!(m.makespan, 0);
        assert_eq!(m.avg_wait_time, 0.0);
        assert_eq!(m.avg_turnaround_time, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
    }
}
