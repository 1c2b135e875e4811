use crate::error::CliResult;
use crate::{input, output};
use stagegraph_gupri::IdentifierCache;
use stagegraph_mapper::{ColumnMap, MapSummary, Mapper};
use std::path::Path;

pub fn run(
    input_path: &Path,
    output_path: &Path,
    cache_path: &Path,
    columns: ColumnMap,
    quiet: bool,
) -> CliResult<()> {
    let rows = input::read_rows(input_path)?;
    let mut cache = IdentifierCache::load(cache_path)?;

    let mapped = Mapper::new(columns).map_rows(&rows, &mut cache);

    output::write_atomic(output_path, &mapped.turtle)?;
    cache.save(cache_path)?;

    if !quiet {
        println!("Wrote {}", output_path.display());
        print_summary(&mapped.summary);
    }
    Ok(())
}

pub fn print_summary(summary: &MapSummary) {
    println!("  rows processed:      {}", summary.rows_processed);
    println!("  rows skipped:        {}", summary.rows_skipped);
    println!("  stages:              {}", summary.stages);
    println!("  deliverables:        {}", summary.deliverables);
    println!("  agents:              {}", summary.agents);
    println!("  triples emitted:     {}", summary.triples_emitted);
    if summary.date_parse_failures > 0 {
        println!("  date parse failures: {}", summary.date_parse_failures);
    }
}
