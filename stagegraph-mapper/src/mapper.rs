//! Stage and deliverable block emission.
//!
//! Two passes over the rows, mirroring the document layout: first the
//! stage clusters (Stage, StagePlan, StageGate declarations), then the
//! deliverable blocks (Specification declared on first sight, one
//! QualityAttribute per row, Agents on first mention). Identifier reuse
//! across rows and runs is entirely the cache's job; the mapper just
//! asks for the same natural key every time.

use std::collections::BTreeSet;

use stagegraph_gupri::{build_id, IdentifierCache};
use stagegraph_turtle::escape_literal;
use stagegraph_vocab::prefix_block;
use tracing::{debug, warn};

use crate::columns::{ColumnMap, Field};
use crate::dates::parse_date;
use crate::record::Row;

/// Per-run mapping counters, reported once at the end of the stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapSummary {
    /// Rows that produced a deliverable entity.
    pub rows_processed: usize,
    /// Rows that produced nothing (no deliverable, or missing grouping
    /// fields, or a repeated header line).
    pub rows_skipped: usize,
    pub stages: usize,
    pub deliverables: usize,
    pub agents: usize,
    pub triples_emitted: usize,
    /// Date cells present but unparseable; the triple was omitted.
    pub date_parse_failures: usize,
}

/// A complete instance document plus its mapping counters.
#[derive(Debug)]
pub struct MapOutput {
    pub turtle: String,
    pub summary: MapSummary,
}

/// Maps spreadsheet rows to Turtle instance data.
#[derive(Debug, Default)]
pub struct Mapper {
    columns: ColumnMap,
}

impl Mapper {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }

    /// Map a batch of rows into one instance document.
    ///
    /// Every identifier is minted or reused through `cache`, so calling
    /// this twice with the same cache yields byte-identical output.
    pub fn map_rows(&self, rows: &[Row], cache: &mut IdentifierCache) -> MapOutput {
        let mut summary = MapSummary::default();

        let stage_blocks = self.emit_stage_blocks(rows, cache, &mut summary);
        let deliverable_blocks = self.emit_deliverable_blocks(rows, cache, &mut summary);

        let mut turtle = prefix_block();
        turtle.push_str(&stage_blocks);
        turtle.push_str(&deliverable_blocks);

        debug!(
            rows_processed = summary.rows_processed,
            rows_skipped = summary.rows_skipped,
            triples = summary.triples_emitted,
            "mapping pass complete"
        );
        MapOutput { turtle, summary }
    }

    /// One Stage/StagePlan/StageGate cluster per distinct
    /// (value stream, stage) pair, in first-seen order.
    fn emit_stage_blocks(
        &self,
        rows: &[Row],
        cache: &mut IdentifierCache,
        summary: &mut MapSummary,
    ) -> String {
        let mut out = String::new();
        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();

        for row in rows {
            let stream = row.value(&self.columns, Field::ValueStream);
            let stage = row.value(&self.columns, Field::StageGate);

            if is_header_echo(stream, stage) || stage.is_empty() {
                continue;
            }
            if !seen.insert((stream.to_string(), stage.to_string())) {
                continue;
            }
            summary.stages += 1;

            let hint = format!("{stream} {stage}");
            let stage_id = build_id(cache, "Stage", &[stream, stage], Some(&hint));
            let plan_id = build_id(cache, "StagePlan", &[stream, stage], None);
            let gate_id = build_id(cache, "StageGate", &[stream, stage], None);
            let spec_id = build_id(cache, "Specification", &[stream, stage], None);

            let label = self.stage_label(row, stage);

            out.push('\n');
            out.push_str(&format!("# Stage: {}\n", comment_text(&label, usize::MAX)));
            out.push_str(&format!("{stage_id} a sg:Stage ;\n"));
            out.push_str(&format!("    rdfs:label {} ;\n", quoted(&label)));
            out.push_str(&format!("    sg:hasPlan {plan_id} ;\n"));
            out.push_str(&format!("    sg:hasGate {gate_id} ;\n"));
            out.push_str(&format!("    sg:hasSpecification {spec_id} .\n"));

            out.push('\n');
            out.push_str(&format!("{plan_id} a sg:StagePlan ;\n"));
            out.push_str(&format!(
                "    rdfs:label {} .\n",
                quoted(&format!("Plan for {label}"))
            ));

            out.push('\n');
            out.push_str(&format!("{gate_id} a sg:StageGate ;\n"));
            out.push_str(&format!(
                "    rdfs:label {} .\n",
                quoted(&format!("Gate for {label}"))
            ));

            summary.triples_emitted += 9;
        }
        out
    }

    /// Specification declarations and deliverable blocks, row by row.
    fn emit_deliverable_blocks(
        &self,
        rows: &[Row],
        cache: &mut IdentifierCache,
        summary: &mut MapSummary,
    ) -> String {
        let mut out = String::new();
        let mut declared_specs: BTreeSet<(String, String)> = BTreeSet::new();
        let mut declared_agents: BTreeSet<String> = BTreeSet::new();

        for row in rows {
            let stream = row.value(&self.columns, Field::ValueStream);
            let stage = row.value(&self.columns, Field::StageGate);
            let deliverable = row.value(&self.columns, Field::Deliverable);

            if is_header_echo(stream, stage) || stream.is_empty() || stage.is_empty() {
                summary.rows_skipped += 1;
                debug!(stream, stage, "row missing grouping fields, skipped");
                continue;
            }

            let spec_id = build_id(cache, "Specification", &[stream, stage], None);
            if declared_specs.insert((stream.to_string(), stage.to_string())) {
                let label = self.stage_label(row, stage);
                out.push('\n');
                out.push_str(&format!("{spec_id} a sg:Specification ;\n"));
                out.push_str(&format!(
                    "    rdfs:label {} .\n",
                    quoted(&format!("Specification for {label}"))
                ));
                summary.triples_emitted += 2;
            }

            if deliverable.is_empty() {
                summary.rows_skipped += 1;
                debug!(stream, stage, "row without deliverable, skipped");
                continue;
            }
            summary.rows_processed += 1;
            summary.deliverables += 1;

            let qa_id = build_id(
                cache,
                "QualityAttribute",
                &[stream, stage, deliverable],
                Some(deliverable),
            );

            // Agents are declared once, on first mention.
            let owner = row.value(&self.columns, Field::Owner);
            let mut agent_ids: Vec<String> = Vec::new();
            for name in owner.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                let agent_id = build_id(cache, "Agent", &[name], Some(name));
                if declared_agents.insert(name.to_string()) {
                    out.push('\n');
                    out.push_str(&format!("{agent_id} a prov:Agent ;\n"));
                    out.push_str(&format!("    rdfs:label {} .\n", quoted(name)));
                    summary.agents += 1;
                    summary.triples_emitted += 2;
                }
                if !agent_ids.contains(&agent_id) {
                    agent_ids.push(agent_id);
                }
            }

            let mut parts: Vec<String> = vec![
                "a sg:QualityAttribute".to_string(),
                format!("rdfs:label {}", quoted(deliverable)),
            ];

            let explanation = row.value(&self.columns, Field::Explanation);
            if !explanation.is_empty() {
                parts.push(format!("rdfs:comment {}", quoted(explanation)));
            }
            let category = row.value(&self.columns, Field::Category);
            if !category.is_empty() {
                parts.push(format!("sg:hasCategory {}", quoted(category)));
            }
            for (field, predicate) in [
                (Field::PlanDate, "sg:plannedDate"),
                (Field::ActualDate, "sg:actualDate"),
            ] {
                let raw = row.value(&self.columns, field);
                if raw.is_empty() {
                    continue;
                }
                match parse_date(raw) {
                    Some(date) => {
                        parts.push(format!("{predicate} \"{date}\"^^xsd:date"));
                    }
                    None => {
                        summary.date_parse_failures += 1;
                        warn!(value = raw, predicate, "unparseable date cell, triple omitted");
                    }
                }
            }
            let reference = row.value(&self.columns, Field::Reference);
            if !reference.is_empty() {
                parts.push(format!("sg:reference {}", quoted(reference)));
            }

            let mut triples = parts.len();
            if !agent_ids.is_empty() {
                parts.push(format!("prov:wasAttributedTo {}", agent_ids.join(", ")));
                triples += agent_ids.len();
            }

            out.push('\n');
            out.push_str(&format!("# Deliverable: {}\n", comment_text(deliverable, 50)));
            out.push_str(&format!("{qa_id} {} .\n", parts.join(" ;\n    ")));
            out.push_str(&format!("{spec_id} sg:hasCQA {qa_id} .\n"));
            summary.triples_emitted += triples + 1;
        }
        out
    }

    fn stage_label(&self, row: &Row, stage: &str) -> String {
        let description = row.value(&self.columns, Field::StageDescription);
        if description.is_empty() {
            format!("Stage {stage}")
        } else {
            description.to_string()
        }
    }
}

/// A repeated header line inside the data (common in concatenated CSV
/// exports) must not become a stage or deliverable.
fn is_header_echo(stream: &str, stage: &str) -> bool {
    stream == "Value Stream" && stage == "Stage Gate"
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", escape_literal(text))
}

/// Flatten text onto one line for a `#` comment, truncating long values.
fn comment_text(text: &str, max_chars: usize) -> String {
    let flat = text
        .replace("\r\n", "\n")
        .replace('\n', " / ")
        .replace('\r', " ");
    if flat.chars().count() > max_chars {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        flat
    }
}
