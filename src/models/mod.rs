//! Simulation domain models.
//!
//! Process records for each lifecycle state and the workload that feeds
//! the simulator.
//!
//! # Lifecycle
//!
//! | State | Record | Owner |
//! |-------|--------|-------|
//! | pending | `Process` | simulator pending queue |
//! | ready | `Process` | simulator ready set |
//! | running | `Dispatch` | simulator processor slot |
//! | completed | `CompletedProcess` | simulation outcome |

mod process;
mod workload;

pub use process::{CompletedProcess, Dispatch, Process, Tick};
pub use workload::Workload;
