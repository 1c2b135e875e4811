//! Row-to-graph mapping for stage-gate tabular records.
//!
//! Takes rows extracted from the program spreadsheet (as column → value
//! maps) and emits Turtle instance data: one `Stage`/`StagePlan`/
//! `StageGate`/`Specification` cluster per distinct (value stream, stage)
//! pair, one `QualityAttribute` per deliverable row, and one `prov:Agent`
//! per distinct owner name. Identifiers come from the
//! [`stagegraph_gupri`] builder so re-runs over evolving source data keep
//! the same subjects.
//!
//! Rows missing a deliverable contribute no entity and are counted as
//! skips; unparseable dates drop that one triple. Neither is fatal.

pub mod columns;
pub mod dates;
pub mod mapper;
pub mod record;

pub use columns::{ColumnMap, Field};
pub use mapper::{MapOutput, MapSummary, Mapper};
pub use record::Row;
