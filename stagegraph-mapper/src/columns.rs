//! Logical field to spreadsheet column mapping.
//!
//! Exported spreadsheets rarely agree on header names: re-exports rename
//! columns to `Drop Down.1`, `Unnamed: 5`, or wrap headers across lines.
//! Instead of hardcoding one header set, each logical field carries an
//! ordered list of candidate column names; the first candidate present
//! and non-empty in a row wins. The defaults cover the header variants
//! seen in practice, and the whole table can be replaced from a JSON
//! file for other exports.

use serde::Deserialize;

/// Logical fields the mapper reads from a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ValueStream,
    StageGate,
    StageDescription,
    FunctionalArea,
    Category,
    Deliverable,
    Explanation,
    Owner,
    Status,
    PlanDate,
    ActualDate,
    Reference,
}

/// Ordered candidate column names per logical field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub value_stream: Vec<String>,
    pub stage_gate: Vec<String>,
    pub stage_description: Vec<String>,
    pub functional_area: Vec<String>,
    pub category: Vec<String>,
    pub deliverable: Vec<String>,
    pub explanation: Vec<String>,
    pub owner: Vec<String>,
    pub status: Vec<String>,
    pub plan_date: Vec<String>,
    pub actual_date: Vec<String>,
    pub reference: Vec<String>,
}

impl ColumnMap {
    /// Candidate column names for a field, in priority order.
    pub fn candidates(&self, field: Field) -> &[String] {
        match field {
            Field::ValueStream => &self.value_stream,
            Field::StageGate => &self.stage_gate,
            Field::StageDescription => &self.stage_description,
            Field::FunctionalArea => &self.functional_area,
            Field::Category => &self.category,
            Field::Deliverable => &self.deliverable,
            Field::Explanation => &self.explanation,
            Field::Owner => &self.owner,
            Field::Status => &self.status,
            Field::PlanDate => &self.plan_date,
            Field::ActualDate => &self.actual_date,
            Field::Reference => &self.reference,
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            value_stream: names(&["Value Stream", "Drop Down"]),
            stage_gate: names(&["Stage Gate", "Drop Down.1"]),
            stage_description: names(&["Stage Gate Description", "Drop Down.2"]),
            functional_area: names(&["Functional Area/Subteam", "Drop Down.3"]),
            category: names(&["Category", "Unnamed: 4"]),
            deliverable: names(&["Deliverable", "Unnamed: 5"]),
            explanation: names(&[
                "Explanation/Translation",
                "Explanation/\nTranslation",
                "Unnamed: 6",
            ]),
            owner: names(&["Owner", "Unnamed: 7"]),
            status: names(&["Status", "Drop Down.4"]),
            plan_date: names(&["Plan date", "Plan \ndate"]),
            actual_date: names(&["Actual date", "Actual\ndate"]),
            reference: names(&[
                "Comments/Document reference",
                "Comments/\nDocument reference",
            ]),
        }
    }
}
