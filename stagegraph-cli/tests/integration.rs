use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a `stagegraph` command running in an isolated temp
/// directory, with color disabled for stable assertions.
fn stagegraph_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stagegraph").unwrap();
    cmd.current_dir(work_dir.path());
    cmd.env("HOME", work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

const CSV: &str = "\
Value Stream,Stage Gate,Stage Gate Description,Category,Deliverable,Explanation/Translation,Owner,Plan date\n\
CGT,0,Pre-Kickoff,Regulatory,Start collaboration,Initial alignment,AD Lead,2023-01-31\n\
CGT,0,Pre-Kickoff,Quality,Risk assessment,Early risks,\"AD Lead, QC Lead\",\n\
CGT,1,Kickoff,,Tech transfer plan,,MSAT,not a date\n\
CGT,1,Kickoff,,,,,\n";

const SCHEMA_FRAGMENT: &str = "\
@prefix sg: <https://w3id.org/stage-gate#> .\n\
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
\n\
sg:Stage rdfs:label \"Stage\" .\n\
sg:QualityAttribute rdfs:label \"Quality attribute\" .\n";

fn write_input(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn read_output(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn version_flag() {
    Command::cargo_bin("stagegraph")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stagegraph"));
}

#[test]
fn help_flag() {
    Command::cargo_bin("stagegraph")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage-gate spreadsheet to RDF"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn verbose_quiet_conflict() {
    Command::cargo_bin("stagegraph")
        .unwrap()
        .args(["--verbose", "--quiet", "validate", "x.ttl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_writes_output_and_cache() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "instances.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote instances.ttl"))
        .stdout(predicate::str::contains("rows processed"));

    let turtle = read_output(&tmp, "instances.ttl");
    assert!(turtle.starts_with("@prefix prov:"));
    assert!(turtle.contains("a sg:Stage ;"));
    assert!(turtle.contains("rdfs:label \"Start collaboration\""));
    assert!(turtle.contains("sg:plannedDate \"2023-01-31\"^^xsd:date"));

    // cache lands next to the output by default
    assert!(tmp.path().join("gupri_mappings.json").exists());
}

#[test]
fn generate_is_stable_across_runs() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "first.ttl"])
        .assert()
        .success();
    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "second.ttl"])
        .assert()
        .success();

    assert_eq!(read_output(&tmp, "first.ttl"), read_output(&tmp, "second.ttl"));
}

#[test]
fn generate_honors_explicit_cache_flag() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args([
            "generate", "rows.csv", "-o", "out.ttl", "--cache", "ids.json",
        ])
        .assert()
        .success();

    assert!(tmp.path().join("ids.json").exists());
    assert!(!tmp.path().join("gupri_mappings.json").exists());
}

#[test]
fn generate_rejects_missing_input() {
    let tmp = TempDir::new().unwrap();
    stagegraph_cmd(&tmp)
        .args(["generate", "nope.csv", "-o", "out.ttl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: input:"));
}

// ============================================================================
// combine
// ============================================================================

#[test]
fn combine_merges_and_dedups_prefixes() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "a.ttl", SCHEMA_FRAGMENT);
    write_input(
        &tmp,
        "b.ttl",
        "@prefix sg: <https://w3id.org/stage-gate#> .\n\nsg:x sg:p sg:y .\n",
    );

    stagegraph_cmd(&tmp)
        .args(["combine", "a.ttl", "b.ttl", "-o", "merged.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined 2 documents"));

    let merged = read_output(&tmp, "merged.ttl");
    assert_eq!(merged.matches("@prefix sg:").count(), 1);
    assert!(merged.contains("sg:x sg:p sg:y ."));
    assert!(merged.contains("rdfs:label \"Stage\""));
}

#[test]
fn combine_prefix_conflict_produces_no_output() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "a.ttl", "@prefix sg: <https://w3id.org/stage-gate#> .\n");
    write_input(&tmp, "b.ttl", "@prefix sg: <https://example.org/other#> .\n");

    stagegraph_cmd(&tmp)
        .args(["combine", "a.ttl", "b.ttl", "-o", "merged.ttl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("prefix conflict"))
        .stderr(predicate::str::contains("b.ttl"));

    assert!(!tmp.path().join("merged.ttl").exists());
}

#[test]
fn combine_output_listed_as_input_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "a.ttl", "sg:x sg:p sg:y .\n");

    stagegraph_cmd(&tmp)
        .args(["combine", "a.ttl", "-o", "a.ttl"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("also listed as an input"));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn validate_accepts_generated_output() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "instances.ttl"])
        .assert()
        .success();

    stagegraph_cmd(&tmp)
        .args(["validate", "instances.ttl", "--expect-deliverables", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_count_mismatch_is_a_warning_not_failure() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "instances.ttl"])
        .assert()
        .success();

    stagegraph_cmd(&tmp)
        .args(["validate", "instances.ttl", "--expect-deliverables", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("type count mismatch"));
}

#[test]
fn validate_rejects_invalid_turtle() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "broken.ttl", "this is } not turtle\n");

    stagegraph_cmd(&tmp)
        .args(["validate", "broken.ttl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: validation:"));
}

// ============================================================================
// run (full pipeline)
// ============================================================================

#[test]
fn run_pipeline_end_to_end() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);
    write_input(&tmp, "schema.ttl", SCHEMA_FRAGMENT);

    stagegraph_cmd(&tmp)
        .args([
            "run",
            "rows.csv",
            "--fragment",
            "schema.ttl",
            "-o",
            "pipeline.ttl",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote pipeline.ttl"));

    let combined = read_output(&tmp, "pipeline.ttl");
    // schema fragment and instance data in one document, one prefix block
    assert_eq!(combined.matches("@prefix sg:").count(), 1);
    assert!(combined.contains("rdfs:label \"Quality attribute\""));
    assert!(combined.contains("a sg:QualityAttribute"));
    assert!(tmp.path().join("gupri_mappings.json").exists());
}

#[test]
fn run_twice_produces_identical_documents() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["run", "rows.csv", "-o", "first.ttl"])
        .assert()
        .success();
    stagegraph_cmd(&tmp)
        .args(["run", "rows.csv", "-o", "second.ttl"])
        .assert()
        .success();

    assert_eq!(read_output(&tmp, "first.ttl"), read_output(&tmp, "second.ttl"));
}

#[test]
fn run_with_conflicting_fragment_publishes_nothing() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);
    write_input(&tmp, "bad.ttl", "@prefix sg: <https://example.org/other#> .\n");

    stagegraph_cmd(&tmp)
        .args([
            "run",
            "rows.csv",
            "--fragment",
            "bad.ttl",
            "-o",
            "pipeline.ttl",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: assembly:"));

    assert!(!tmp.path().join("pipeline.ttl").exists());
    assert!(!tmp.path().join("gupri_mappings.json").exists());
}

#[test]
fn corrupt_cache_is_fatal() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);
    write_input(&tmp, "gupri_mappings.json", "{ not json");

    stagegraph_cmd(&tmp)
        .args(["generate", "rows.csv", "-o", "out.ttl"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: cache:"));

    assert!(!tmp.path().join("out.ttl").exists());
}

#[test]
fn quiet_suppresses_summary() {
    let tmp = TempDir::new().unwrap();
    write_input(&tmp, "rows.csv", CSV);

    stagegraph_cmd(&tmp)
        .args(["--quiet", "generate", "rows.csv", "-o", "out.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(tmp.path().join("out.ttl").exists());
}
