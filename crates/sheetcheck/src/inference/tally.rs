//! Per-column type counts and majority voting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::ScalarType;

/// Occurrence count per scalar type, in first-observation order.
pub type TypeCounts = IndexMap<ScalarType, usize>;

/// Select the most frequent type.
///
/// Ties resolve to the type that was inserted first, so the result depends on
/// row order. Returns `None` for an empty tally.
pub fn vote(counts: &TypeCounts) -> Option<ScalarType> {
    let mut best: Option<(ScalarType, usize)> = None;

    for (&scalar, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((scalar, count)),
        }
    }

    best.map(|(scalar, _)| scalar)
}

/// Type counts for every column of a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnTypeTally {
    columns: IndexMap<usize, TypeCounts>,
}

impl ColumnTypeTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified cell for a column.
    pub fn record(&mut self, column: usize, scalar: ScalarType) {
        *self
            .columns
            .entry(column)
            .or_default()
            .entry(scalar)
            .or_insert(0) += 1;
    }

    /// Counts recorded for a column.
    pub fn counts(&self, column: usize) -> Option<&TypeCounts> {
        self.columns.get(&column)
    }

    /// Total number of cells recorded for a column.
    pub fn total(&self, column: usize) -> usize {
        self.columns
            .get(&column)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    /// Majority type of a column, if any cell was recorded for it.
    pub fn majority(&self, column: usize) -> Option<ScalarType> {
        self.columns.get(&column).and_then(vote)
    }
}
