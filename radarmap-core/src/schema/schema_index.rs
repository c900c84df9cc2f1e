use super::{normalize_header, FieldCandidates};
use crate::model::{CellValue, Row};
use std::collections::HashMap;

/// lookup from normalized column name to the column name as published in one row.
///
/// build once per row when several fields are resolved against it. if two columns
/// normalize to the same text, the one listed later in the row wins.
#[derive(Debug, Clone)]
pub struct SchemaIndex<'a> {
    row: &'a Row,
    lookup: HashMap<String, &'a str>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(row: &'a Row) -> SchemaIndex<'a> {
        let lookup = row
            .columns()
            .map(|column| (normalize_header(column), column))
            .collect::<HashMap<_, _>>();
        SchemaIndex { row, lookup }
    }

    /// the published column name matching the first candidate that appears in the row.
    pub fn resolve(&self, candidates: &FieldCandidates) -> Option<&'a str> {
        candidates
            .iter()
            .find_map(|candidate| self.lookup.get(&normalize_header(candidate)).copied())
    }

    /// the cell under the resolved column, if any.
    pub fn value(&self, candidates: &FieldCandidates) -> Option<&'a CellValue> {
        self.resolve(candidates)
            .and_then(|column| self.row.get(column))
    }
}

/// resolves a single field against a row. see [`SchemaIndex`] for resolving several.
pub fn resolve<'a>(row: &'a Row, candidates: &FieldCandidates) -> Option<&'a str> {
    SchemaIndex::new(row).resolve(candidates)
}
