//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First-Come-First-Served.
///
/// Prioritizes processes by arrival tick.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.arrival)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest burst first.
///
/// Minimizes average waiting time among the processes ready at a
/// decision point.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority value first (lower number = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl DispatchingRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs() {
        let early = Process::new("early", 1, 9);
        let late = Process::new("late", 4, 1);
        assert!(Fcfs.evaluate(&early) < Fcfs.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = Process::new("short", 5, 2);
        let long = Process::new("long", 0, 8);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_lowest_priority() {
        let urgent = Process::new("urgent", 0, 1).with_priority(1);
        let relaxed = Process::new("relaxed", 0, 1).with_priority(5);
        assert!(LowestPriority.evaluate(&urgent) < LowestPriority.evaluate(&relaxed));
    }

    #[test]
    fn test_negative_priority_is_most_urgent() {
        let negative = Process::new("neg", 0, 1).with_priority(-3);
        let zero = Process::new("zero", 0, 1);
        assert!(LowestPriority.evaluate(&negative) < LowestPriority.evaluate(&zero));
    }

    #[test]
    fn test_large_ticks_are_lossless() {
        let p = Process::new("big", u64::MAX, u64::MAX);
        assert_eq!(Fcfs.evaluate(&p), u64::MAX as RuleScore);
        assert!(ShortestBurst.evaluate(&p) > 0);
    }
}
