//! Record filtering by dimension membership.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use rms_model::{Dimension, OfflineRecord, RecordSet};

/// Zero or more selected values per filterable dimension.
///
/// A selection is always a set: a single value is a one-element set, never a
/// special case. An empty or absent set leaves that dimension unconstrained,
/// so the UI's "select all" default and "no filter" are indistinguishable
/// here. Dimensions compose by logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterQuery {
    selections: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterQuery::select`].
    #[must_use]
    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(dimension, values);
        self
    }

    /// Replaces the selection for `dimension`.
    pub fn select<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .insert(dimension, values.into_iter().map(Into::into).collect());
    }

    pub fn selection(&self, dimension: Dimension) -> Option<&BTreeSet<String>> {
        self.selections.get(&dimension)
    }

    /// True when no dimension carries a non-empty selection.
    pub fn is_unconstrained(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// True when the record passes every active selection.
    ///
    /// A record with no value for a constrained dimension is excluded; an
    /// empty selection passes everything.
    pub fn matches(&self, record: &OfflineRecord) -> bool {
        self.selections.iter().all(|(dimension, values)| {
            values.is_empty()
                || record
                    .dimension_value(*dimension)
                    .is_some_and(|value| values.contains(value))
        })
    }
}

/// Applies `query` to `records`, producing a new set.
///
/// The source set is never mutated; output preserves input order, and the
/// empty set is a valid result.
pub fn apply(records: &RecordSet, query: &FilterQuery) -> RecordSet {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
