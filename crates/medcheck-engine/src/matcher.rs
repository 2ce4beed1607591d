//! Pairwise matching of a medication list against the reference table.
//!
//! Every unordered pair `(i, j)` with `i < j` is looked up twice: once by
//! lookup key (ingredient, else name) and once by the literal names. The
//! earlier table entry of the two wins, so a pair contributes at most one
//! record. Results come back in pair order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use medcheck_types::{InteractionRecord, Medication};

use crate::store::ReferenceTable;

/// Finds the interactions between all pairs of `medications`.
///
/// Fewer than two medications never touch the table.
pub fn match_pairs(medications: &[Medication], table: &ReferenceTable) -> Vec<InteractionRecord> {
    if medications.len() < 2 {
        return Vec::new();
    }

    collect_matches(medications, table)
}

#[cfg(feature = "parallel")]
fn collect_matches(medications: &[Medication], table: &ReferenceTable) -> Vec<InteractionRecord> {
    (0..medications.len())
        .into_par_iter()
        .flat_map_iter(|i| matches_from(i, medications, table))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_matches(medications: &[Medication], table: &ReferenceTable) -> Vec<InteractionRecord> {
    (0..medications.len())
        .flat_map(|i| matches_from(i, medications, table))
        .collect()
}

/// Matches medication `i` against every later medication.
fn matches_from<'a>(
    i: usize,
    medications: &'a [Medication],
    table: &'a ReferenceTable,
) -> impl Iterator<Item = InteractionRecord> + 'a {
    let first = &medications[i];
    medications[i + 1..]
        .iter()
        .filter_map(move |second| match_pair(first, second, table).cloned())
}

/// Returns the first table entry matching the pair `(a, b)`, if any.
pub fn match_pair<'t>(
    a: &Medication,
    b: &Medication,
    table: &'t ReferenceTable,
) -> Option<&'t InteractionRecord> {
    let by_key = table.first_position(a.lookup_key(), b.lookup_key());
    let by_name = table.first_position(&a.name, &b.name);

    let position = match (by_key, by_name) {
        (Some(k), Some(n)) => Some(k.min(n)),
        (k, n) => k.or(n),
    };

    position.and_then(|p| table.get(p))
}
