//! Fixture bench: every `tests/fixtures/*.in` must render to its sibling
//! `.out`, compared line by line with surrounding whitespace stripped.

use std::fs;
use std::path::{Path, PathBuf};

use cpusched::loader::load_workload;
use cpusched::report::Report;
use cpusched::simulation::simulate;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn stripped_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).collect()
}

#[test]
fn test_fixtures_match_reference_output() {
    let mut inputs: Vec<PathBuf> = fs::read_dir(fixture_dir())
        .expect("fixture directory")
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "in"))
        .collect();
    inputs.sort();
    assert!(!inputs.is_empty(), "no .in fixtures found");

    let mut failures = Vec::new();
    for input in &inputs {
        let reference = input.with_extension("out");
        let expected = fs::read_to_string(&reference)
            .unwrap_or_else(|e| panic!("{}: {e}", reference.display()));

        let workload = load_workload(input).unwrap_or_else(|e| panic!("{e}"));
        let generated = Report::from_outcome(simulate(workload)).to_string();

        if stripped_lines(&generated) != stripped_lines(&expected) {
            failures.push(format!(
                "[FAIL] {}\n--- expected\n{expected}\n--- generated\n{generated}",
                input.display()
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} fixtures failed:\n{}",
        failures.len(),
        inputs.len(),
        failures.join("\n")
    );
}
