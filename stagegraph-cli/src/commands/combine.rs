use crate::error::{CliError, CliResult};
use crate::output;
use stagegraph_turtle::{combine, SourceDocument};
use std::path::{Path, PathBuf};

pub fn run(inputs: &[PathBuf], output_path: &Path, quiet: bool) -> CliResult<()> {
    if inputs.iter().any(|input| input == output_path) {
        return Err(CliError::Usage(format!(
            "output {} is also listed as an input",
            output_path.display()
        )));
    }

    let sources = read_sources(inputs)?;
    let combined = combine(&sources)?;
    output::write_atomic(output_path, &combined)?;

    if !quiet {
        println!(
            "Combined {} documents into {}",
            sources.len(),
            output_path.display()
        );
    }
    Ok(())
}

pub fn read_sources(paths: &[PathBuf]) -> CliResult<Vec<SourceDocument>> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        sources.push(SourceDocument::new(name, text));
    }
    Ok(sources)
}
