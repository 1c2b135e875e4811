use crate::error::{CliError, CliResult};
use stagegraph_mapper::{ColumnMap, Row};
use std::path::Path;
use tracing::debug;

/// Read rows from a CSV export.
///
/// Headers are trimmed (spreadsheet exports often carry stray
/// whitespace or embedded newlines); cell values are kept raw and
/// trimmed at field-resolution time. Short records are tolerated.
pub fn read_rows(path: &Path) -> CliResult<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| CliError::Input(format!("failed to open {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        );
    }
    debug!(path = %path.display(), rows = rows.len(), "read source table");
    Ok(rows)
}

/// Load a column map from a JSON file, or fall back to the defaults.
pub fn load_columns(path: Option<&Path>) -> CliResult<ColumnMap> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading column map");
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?;
            serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("column map {}: {e}", path.display())))
        }
        None => Ok(ColumnMap::default()),
    }
}
