//! Discrete-time CPU scheduling simulator.
//!
//! Replays a static workload tick by tick under a non-preemptive,
//! single-processor policy and reports exact per-process timing.
//!
//! # Modules
//!
//! - **`models`**: Process records per lifecycle state, `Workload`
//! - **`dispatching`**: `Algorithm`, dispatching rules, and the `RuleEngine`
//!   that orders the ready set (FCFS, SJF, priority)
//! - **`simulation`**: The tick loop (`Simulator`)
//! - **`loader`**: Workload file decoding
//! - **`validation`**: Integrity checks on decoded processes
//! - **`report`**: Timeline, metrics, and text/JSON rendering
//!
//! # Example
//!
//! ```
//! use cpusched::loader::parse_workload;
//! use cpusched::report::Report;
//! use cpusched::simulation::simulate;
//!
//! let workload = parse_workload(
//!     "runfor 20\nuse fcfs\n\
//!      process name P1 arrival 0 burst 5\n\
//!      process name P2 arrival 1 burst 3\n",
//! )
//! .unwrap();
//!
//! let report = Report::from_outcome(simulate(workload));
//! assert_eq!(report.completed[1].start_time(), 5);
//! assert_eq!(report.completed[1].wait_time(), 4);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod simulation;
pub mod validation;

pub use error::{ConfigError, ConfigErrorKind, LoadError};
