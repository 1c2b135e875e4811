use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// Write a file atomically: temp file in the same directory, then rename.
///
/// A failed run must never leave a half-written document where a
/// downstream consumer expects a good one.
pub fn write_atomic(path: &Path, contents: &str) -> CliResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, contents)
        .map_err(|e| CliError::Input(format!("failed to write {}: {e}", tmp.display())))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| CliError::Input(format!("failed to rename into {}: {e}", path.display())))?;
    Ok(())
}
