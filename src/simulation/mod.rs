//! Discrete-time, single-processor simulation.
//!
//! # Algorithm
//!
//! Logical time advances one tick at a time from 0 while
//! `current_time < duration`. Each tick runs, in order:
//!
//! 1. **Arrival**: pending processes with `arrival <= now` join the ready set.
//! 2. **Completion**: the running process retires if `now >= start + burst`.
//! 3. **Dispatch**: an idle processor takes the ready process chosen by the
//!    algorithm's rule engine.
//! 4. **Early exit**: stop once nothing is pending, ready, or running.
//!
//! Completion precedes dispatch so the processor is handed over within
//! the tick it frees up. Work still unfinished when the window closes is
//! dropped from the outcome.
//!
//! # Complexity
//! O(ticks × ready) with a full rule evaluation of the ready set per dispatch.

use std::collections::VecDeque;

use log::{debug, info, trace};
use serde::Serialize;

use crate::dispatching::{Algorithm, RuleEngine};
use crate::models::{CompletedProcess, Dispatch, Process, Tick, Workload};

/// Result of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Completed processes ordered by finish time.
    pub completed: Vec<CompletedProcess>,
    /// Tick at which the loop stopped.
    pub end_time: Tick,
    /// Processes that never completed inside the window.
    pub unfinished: usize,
}

impl SimulationOutcome {
    /// Whether any process completed.
    pub fn has_completions(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Tick-by-tick scheduler simulation for one algorithm.
#[derive(Debug, Clone)]
pub struct Simulator {
    algorithm: Algorithm,
    rule_engine: RuleEngine,
    duration: Tick,
}

impl Simulator {
    /// Creates a simulator for `algorithm` over `duration` ticks.
    pub fn new(algorithm: Algorithm, duration: Tick) -> Self {
        Self {
            algorithm,
            rule_engine: algorithm.rule_engine(),
            duration,
        }
    }

    /// Simulates `processes` and returns the completed set.
    ///
    /// With no processes the loop never runs, whatever the duration.
    pub fn run(&self, processes: Vec<Process>) -> SimulationOutcome {
        let duration = if processes.is_empty() { 0 } else { self.duration };
        let mut state = RunState::new(processes);
        let mut now: Tick = 0;

        info!(
            "simulating {} processes under {} for {} ticks",
            state.pending.len(),
            self.algorithm,
            duration
        );

        while now < duration {
            trace!(
                "t={now} pending={} ready={} running={}",
                state.pending.len(),
                state.ready.len(),
                state.running.is_some()
            );

            state.admit_arrivals(now);
            state.retire_if_done(now);
            if state.running.is_none() {
                self.dispatch(&mut state, now);
            }
            if state.is_drained() {
                debug!("t={now} all processes completed");
                break;
            }
            now += 1;
        }

        let unfinished = state.unfinished();
        info!(
            "simulation stopped at t={now}: {} completed, {unfinished} unfinished",
            state.completed.len()
        );

        let mut completed = state.completed;
        completed.sort_by_key(CompletedProcess::finish_time);

        SimulationOutcome {
            algorithm: self.algorithm,
            completed,
            end_time: now,
            unfinished,
        }
    }

    fn dispatch(&self, state: &mut RunState, now: Tick) {
        let Some(idx) = self.rule_engine.select_best(&state.ready) else {
            return;
        };
        let process = state.ready.remove(idx);
        debug!(
            "t={now} dispatch {} (burst={}, priority={}, ready={})",
            process.name,
            process.burst,
            process.priority,
            state.ready.len()
        );
        state.running = Some(Dispatch::start(process, now));
    }
}

/// Simulates a loaded workload.
pub fn simulate(workload: Workload) -> SimulationOutcome {
    Simulator::new(workload.algorithm, workload.duration).run(workload.processes)
}

/// The four-way partition of the process set during a run.
///
/// Every process lives in exactly one partition; moves between them
/// transfer ownership.
struct RunState {
    pending: VecDeque<Process>,
    ready: Vec<Process>,
    running: Option<Dispatch>,
    completed: Vec<CompletedProcess>,
}

impl RunState {
    fn new(mut processes: Vec<Process>) -> Self {
        // Stable: equal arrivals keep declaration order.
        processes.sort_by_key(|p| p.arrival);
        Self {
            completed: Vec::with_capacity(processes.len()),
            pending: processes.into(),
            ready: Vec::new(),
            running: None,
        }
    }

    fn admit_arrivals(&mut self, now: Tick) {
        while self.pending.front().is_some_and(|p| p.has_arrived(now)) {
            if let Some(process) = self.pending.pop_front() {
                debug!("t={now} arrival {}", process.name);
                self.ready.push(process);
            }
        }
    }

    fn retire_if_done(&mut self, now: Tick) {
        if !self.running.as_ref().is_some_and(|d| d.is_done_at(now)) {
            return;
        }
        if let Some(dispatch) = self.running.take() {
            let done = dispatch.complete();
            debug!(
                "t={now} complete {} (wait={}, turnaround={})",
                done.name(),
                done.wait_time(),
                done.turnaround_time()
            );
            self.completed.push(done);
        }
    }

    fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty() && self.running.is_none()
    }

    fn unfinished(&self) -> usize {
        self.pending.len() + self.ready.len() + usize::from(self.running.is_some())
    }
}
