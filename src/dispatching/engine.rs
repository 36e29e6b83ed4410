//! Rule engine for multi-key dispatching.
//!
//! Composes a primary dispatching rule with tie-breaking rules that are
//! consulted in sequence.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for ready-set ordering.
///
/// Rules are compared lexicographically: the next rule is consulted only
/// when every earlier rule ties. Sorting is stable, so processes that tie
/// on every rule keep their ready-set order.
///
/// # Example
/// ```
/// use cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::Fcfs);
/// assert_eq!(engine.rule_names(), vec!["SJF", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, ready-set order wins.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts processes by dispatch order (first = runs next).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the index of the process to dispatch next.
    pub fn select_best(&self, processes: &[Process]) -> Option<usize> {
        self.sort_indices(processes).first().copied()
    }

    /// Scores a single process under each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<super::RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        self.rules
            .iter()
            .map(|r| r.evaluate(a).cmp(&r.evaluate(b)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
