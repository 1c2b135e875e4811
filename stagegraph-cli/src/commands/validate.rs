use crate::error::{CliError, CliResult};
use colored::Colorize;
use stagegraph_turtle::{validate, ValidationResult};
use stagegraph_vocab::sg;
use std::path::Path;

pub fn run(file: &Path, expect_deliverables: Option<usize>, quiet: bool) -> CliResult<()> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| CliError::Input(format!("failed to read {}: {e}", file.display())))?;

    let expected: Vec<(&str, usize)> = expect_deliverables
        .map(|count| vec![(sg::QUALITY_ATTRIBUTE, count)])
        .unwrap_or_default();

    let result = validate(&text, &expected);
    report(&result, &file.display().to_string(), quiet)
}

/// Print warnings and the verdict; syntax failure is fatal.
pub fn report(result: &ValidationResult, name: &str, quiet: bool) -> CliResult<()> {
    if !result.valid {
        return Err(CliError::Validation(format!(
            "{name}: {}",
            result.errors.join("; ")
        )));
    }
    for warning in &result.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    if !quiet {
        println!(
            "{name}: valid ({} triples, {} warnings)",
            result.triple_count,
            result.warnings.len()
        );
    }
    Ok(())
}
