//! Workload loading.
//!
//! Decodes the line-oriented workload format into a validated
//! [`Workload`]:
//!
//! ```text
//! # fcfs | sjf | priority
//! processcount 2
//! runfor 20
//! use fcfs
//! process name P1 arrival 0 burst 5
//! process name P2 arrival 1 burst 3 priority 2
//! end
//! ```
//!
//! `processcount` is advisory. `runfor` and `use` are required; a later
//! occurrence replaces an earlier one. Comments take a whole line.
//! Lines after `end` are not read. Processes come back arrival-sorted,
//! equal arrivals in declaration order.

mod directive;

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{ConfigError, ConfigErrorKind, LoadError, LoadResult};
use crate::models::Workload;
use crate::validation::validate_processes;
use directive::Directive;

/// Reads and decodes a workload file.
pub fn load_workload(path: impl AsRef<Path>) -> LoadResult<Workload> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Resource {
        path: path.to_path_buf(),
        source,
    })?;

    let workload = parse_workload(&text).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded {} processes from {} ({}, runfor {})",
        workload.processes.len(),
        path.display(),
        workload.algorithm,
        workload.duration
    );
    Ok(workload)
}

/// Decodes workload text.
pub fn parse_workload(text: &str) -> Result<Workload, ConfigError> {
    let mut declared_count = None;
    let mut duration = None;
    let mut algorithm = None;
    let mut processes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let directive =
            Directive::parse(line).map_err(|kind| ConfigError::at_line(idx + 1, kind))?;
        match directive {
            None => continue,
            Some(Directive::ProcessCount(n)) => declared_count = Some(n),
            Some(Directive::RunFor(ticks)) => duration = Some(ticks),
            Some(Directive::Use(algo)) => algorithm = Some(algo),
            Some(Directive::Process(p)) => processes.push(p),
            Some(Directive::End) => break,
        }
    }

    let duration =
        duration.ok_or(ConfigError::global(ConfigErrorKind::MissingDirective("runfor")))?;
    let algorithm =
        algorithm.ok_or(ConfigError::global(ConfigErrorKind::MissingDirective("use")))?;
    validate_processes(&processes)?;

    let mut workload = Workload::new(algorithm, duration);
    workload.processes = processes;
    workload.declared_count = declared_count;
    workload.sort_by_arrival();

    if workload.count_mismatch() {
        warn!(
            "processcount declares {} processes but {} were given",
            declared_count.unwrap_or_default(),
            workload.processes.len()
        );
    }

    Ok(workload)
}
