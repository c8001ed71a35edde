// src/matching/reconcile.rs
// Pairwise reconciliation of a local unit-name list against an external one

use std::collections::HashSet;

use log::debug;

use super::equivalence::equivalent;
use super::types::ComparisonResult;

/// Compare two lists of unit names with structural equivalence, pairwise.
///
/// `common` holds local items with at least one equivalent external item;
/// `missing_from_external` the local items without one; `extra_in_external`
/// the external items no local item matches. The sync percentage is the
/// rounded share of common items over the distinct-string union of both
/// lists, 0 when the union is empty.
pub fn compare_lists_of_names<S, T>(local_list: &[S], external_list: &[T]) -> ComparisonResult
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut common = Vec::new();
    let mut missing_from_external = Vec::new();
    for local in local_list {
        let local = local.as_ref();
        if external_list
            .iter()
            .any(|external| equivalent(local, external.as_ref()))
        {
            common.push(local.to_string());
        } else {
            missing_from_external.push(local.to_string());
        }
    }

    let mut extra_in_external = Vec::new();
    for external in external_list {
        let external = external.as_ref();
        if !local_list
            .iter()
            .any(|local| equivalent(local.as_ref(), external))
        {
            extra_in_external.push(external.to_string());
        }
    }

    let union: HashSet<&str> = local_list
        .iter()
        .map(|name| name.as_ref())
        .chain(external_list.iter().map(|name| name.as_ref()))
        .collect();
    let sync_percentage = if union.is_empty() {
        0
    } else {
        (100.0 * common.len() as f64 / union.len() as f64).round() as u32
    };

    debug!(
        "Reconciled lists: {} common, {} missing, {} extra, {}% in sync",
        common.len(),
        missing_from_external.len(),
        extra_in_external.len(),
        sync_percentage
    );

    ComparisonResult {
        common,
        missing_from_external,
        extra_in_external,
        sync_percentage,
    }
}
