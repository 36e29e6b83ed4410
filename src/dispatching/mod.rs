//! Dispatching rules and rule engine for ready-set ordering.
//!
//! Each [`Algorithm`] maps to a [`RuleEngine`]: a primary rule followed
//! by tie-breakers, evaluated in sequence. The process with the lowest
//! key wins the processor.
//!
//! # Usage
//!
//! ```
//! use cpusched::dispatching::Algorithm;
//! use cpusched::models::Process;
//!
//! let ready = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 2)];
//! let engine = Algorithm::Sjf.rule_engine();
//! assert_eq!(engine.select_best(&ready), Some(1));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::Process;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Wide enough to hold any tick or
/// priority value without loss.
pub type RuleScore = i128;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process. Lower = dispatched first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Supported scheduling algorithms. All are non-preemptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served: key = (arrival).
    Fcfs,
    /// Shortest-Job-First: key = (burst, arrival).
    Sjf,
    /// Priority: key = (priority, arrival), lower value first.
    Priority,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority];

    /// Directive keyword (`fcfs`, `sjf`, `priority`).
    pub fn keyword(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
        }
    }

    /// Builds the rule engine implementing this algorithm's ordering.
    pub fn rule_engine(self) -> RuleEngine {
        match self {
            Algorithm::Fcfs => RuleEngine::new().with_rule(rules::Fcfs),
            Algorithm::Sjf => RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::Fcfs),
            Algorithm::Priority => RuleEngine::new()
                .with_rule(rules::LowestPriority)
                .with_tie_breaker(rules::Fcfs),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Algorithm name not recognized by [`Algorithm::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.keyword() == lower)
            .ok_or(UnknownAlgorithm(lower))
    }
}
