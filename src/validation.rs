//! Input validation for decoded workloads.
//!
//! Checks structural integrity of the process list before simulation.
//! Detects:
//! - Duplicate process names
//! - Zero bursts
//!
//! Stops at the first problem found, in declaration order.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigErrorKind};
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), ConfigError>;

/// Validates the process list of a workload.
///
/// Checks, per process in order:
/// 1. Burst is positive
/// 2. Name not seen before (case-sensitive)
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut names = HashSet::new();

    for p in processes {
        if p.burst == 0 {
            return Err(ConfigError::global(ConfigErrorKind::ZeroBurst {
                name: p.name.clone(),
            }));
        }
        if !names.insert(p.name.as_str()) {
            return Err(ConfigError::global(ConfigErrorKind::DuplicateName {
                name: p.name.clone(),
            }));
        }
    }

    Ok(())
}
