use crate::commands::{combine as combine_cmd, generate, validate as validate_cmd};
use crate::error::CliResult;
use crate::{input, output};
use stagegraph_gupri::IdentifierCache;
use stagegraph_mapper::{ColumnMap, Mapper};
use stagegraph_turtle::{combine, validate, SourceDocument};
use stagegraph_vocab::sg;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Full pipeline: map rows, merge with static fragments, validate, and
/// only then publish the document and the updated cache.
///
/// Nothing durable is written until the combined document has passed
/// validation, so a failed run leaves the previous output and cache
/// untouched.
pub fn run(
    input_path: &Path,
    fragments: &[PathBuf],
    output_path: &Path,
    cache_path: &Path,
    columns: ColumnMap,
    quiet: bool,
) -> CliResult<()> {
    let rows = input::read_rows(input_path)?;
    let mut cache = IdentifierCache::load(cache_path)?;

    let mapped = Mapper::new(columns).map_rows(&rows, &mut cache);
    debug!(
        stages = mapped.summary.stages,
        deliverables = mapped.summary.deliverables,
        fragments = fragments.len(),
        "mapped rows, assembling document"
    );

    // Static schema fragments first, instance data last.
    let mut sources = combine_cmd::read_sources(fragments)?;
    sources.push(SourceDocument::new(
        format!("{} (generated)", input_path.display()),
        mapped.turtle,
    ));
    let combined = combine(&sources)?;

    // Cross-check that assembly preserved every mapped deliverable.
    let expected = [(sg::QUALITY_ATTRIBUTE, mapped.summary.deliverables)];
    let result = validate(&combined, &expected);
    validate_cmd::report(&result, &output_path.display().to_string(), true)?;

    output::write_atomic(output_path, &combined)?;
    cache.save(cache_path)?;

    if !quiet {
        println!(
            "Wrote {} ({} triples, {} warnings)",
            output_path.display(),
            result.triple_count,
            result.warnings.len()
        );
        generate::print_summary(&mapped.summary);
    }
    Ok(())
}
