//! Row records handed over by the tabular input boundary.

use std::collections::HashMap;

use crate::columns::{ColumnMap, Field};

/// One spreadsheet row: column name → raw cell text.
///
/// The input boundary owns header detection and sheet selection; this
/// type only resolves logical fields through a [`ColumnMap`].
#[derive(Clone, Debug, Default)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }

    /// Resolve a logical field: first candidate column that is present
    /// with a non-empty trimmed value wins, otherwise empty string.
    pub fn value<'a>(&'a self, columns: &ColumnMap, field: Field) -> &'a str {
        for candidate in columns.candidates(field) {
            if let Some(raw) = self.cells.get(candidate) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return trimmed;
                }
            }
        }
        ""
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_nonempty_candidate_wins() {
        let columns = ColumnMap::default();
        let r = row(&[("Value Stream", "  "), ("Drop Down", "CGT")]);
        assert_eq!(r.value(&columns, Field::ValueStream), "CGT");
    }

    #[test]
    fn preferred_header_shadows_fallback() {
        let columns = ColumnMap::default();
        let r = row(&[("Deliverable", "Primary"), ("Unnamed: 5", "Fallback")]);
        assert_eq!(r.value(&columns, Field::Deliverable), "Primary");
    }

    #[test]
    fn missing_field_is_empty() {
        let columns = ColumnMap::default();
        let r = row(&[("Deliverable", "x")]);
        assert_eq!(r.value(&columns, Field::Owner), "");
    }

    #[test]
    fn values_are_trimmed() {
        let columns = ColumnMap::default();
        let r = row(&[("Owner", "  AD Lead \n")]);
        assert_eq!(r.value(&columns, Field::Owner), "AD Lead");
    }
}
