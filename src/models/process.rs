//! Process records.
//!
//! A process moves through three record types as the simulation advances:
//!
//! | Type | State | Fields |
//! |------|-------|--------|
//! | `Process` | pending / ready | name, arrival, burst, priority |
//! | `Dispatch` | running | + start time |
//! | `CompletedProcess` | completed | + finish, wait, turnaround |
//!
//! Each transition consumes the previous record, so a record can only be
//! started once and completed once. A `Dispatch` has no way to stop early:
//! its finish time is always `start_time + burst`.

use serde::{Deserialize, Serialize};

/// One unit of logical simulated time.
pub type Tick = u64;

/// Static description of a process, as declared in the workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, case-sensitive name.
    pub name: String,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Ticks required to finish once started. Always positive after validation.
    pub burst: Tick,
    /// Scheduling priority (lower = more urgent). Only the priority policy reads it.
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(name: impl Into<String>, arrival: Tick, burst: Tick) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival <= now
    }
}

/// A process that holds the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    process: Process,
    start_time: Tick,
}

impl Dispatch {
    /// Starts `process` at `start_time`. The caller guarantees `start_time >= arrival`.
    pub(crate) fn start(process: Process, start_time: Tick) -> Self {
        debug_assert!(process.arrival <= start_time);
        Self {
            process,
            start_time,
        }
    }

    /// The running process.
    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Tick at which the process began executing.
    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    /// Tick at which the burst completes, saturating at `Tick::MAX`.
    ///
    /// No window reaches `Tick::MAX`, so a saturated burst never completes.
    #[inline]
    pub fn finishes_at(&self) -> Tick {
        self.start_time.saturating_add(self.process.burst)
    }

    /// Whether the burst has completed by `now`.
    #[inline]
    pub fn is_done_at(&self, now: Tick) -> bool {
        now >= self.finishes_at()
    }

    /// Retires the process and derives its metrics.
    pub(crate) fn complete(self) -> CompletedProcess {
        let finish_time = self.finishes_at();
        let turnaround_time = finish_time - self.process.arrival;
        CompletedProcess {
            wait_time: turnaround_time - self.process.burst,
            turnaround_time,
            finish_time,
            start_time: self.start_time,
            process: self.process,
        }
    }
}

/// A process whose burst has completed, with its timing metrics.
///
/// Only obtainable by completing a [`Dispatch`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedProcess {
    #[serde(flatten)]
    process: Process,
    start_time: Tick,
    finish_time: Tick,
    wait_time: Tick,
    turnaround_time: Tick,
}

impl CompletedProcess {
    /// The static process description.
    pub fn process(&self) -> &Process {
        &self.process
    }

    /// Process name.
    pub fn name(&self) -> &str {
        &self.process.name
    }

    /// Tick the process first began executing.
    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    /// Tick at which the burst completed.
    pub fn finish_time(&self) -> Tick {
        self.finish_time
    }

    /// Time spent ready but not running: `turnaround - burst`.
    pub fn wait_time(&self) -> Tick {
        self.wait_time
    }

    /// Time from arrival to completion: `finish - arrival`.
    pub fn turnaround_time(&self) -> Tick {
        self.turnaround_time
    }
}
