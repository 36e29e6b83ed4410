//! Workload model: the process set plus run parameters.

use serde::{Deserialize, Serialize};

use super::{Process, Tick};
use crate::dispatching::Algorithm;

/// A complete simulation input.
///
/// Produced by the loader with processes in arrival order; the
/// simulator takes ownership of the process list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Declared processes. Arrival-ordered once [`Workload::sort_by_arrival`] has run.
    pub processes: Vec<Process>,
    /// Total ticks to simulate.
    pub duration: Tick,
    /// Dispatching policy.
    pub algorithm: Algorithm,
    /// Advisory `processcount` value. Never checked against `processes`.
    pub declared_count: Option<usize>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new(algorithm: Algorithm, duration: Tick) -> Self {
        Self {
            processes: Vec::new(),
            duration,
            algorithm,
            declared_count: None,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Sets the declared process count.
    pub fn with_declared_count(mut self, count: usize) -> Self {
        self.declared_count = Some(count);
        self
    }

    /// Stable sort by arrival; equal arrivals keep declaration order.
    pub fn sort_by_arrival(&mut self) {
        self.processes.sort_by_key(|p| p.arrival);
    }

    /// Whether `processcount` was given and disagrees with the process list.
    pub fn count_mismatch(&self) -> bool {
        self.declared_count
            .is_some_and(|n| n != self.processes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let mut w = Workload::new(Algorithm::Fcfs, 10)
            .with_process(Process::new("C", 4, 1))
            .with_process(Process::new("A", 0, 1))
            .with_process(Process::new("B", 0, 1));
        w.sort_by_arrival();
        let names: Vec<&str> = w.processes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_count_mismatch() {
        let w = Workload::new(Algorithm::Fcfs, 10).with_process(Process::new("P1", 0, 1));
        assert!(!w.count_mismatch());
        assert!(!w.clone().with_declared_count(1).count_mismatch());
        assert!(w.with_declared_count(3).count_mismatch());
    }
}
