//! Route-link deduplication and sequence numbering.

use std::collections::{BTreeMap, BTreeSet};

use stopsync_model::{Direction, RouteLink};

/// Deduplicated route links with fresh sequence numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequencedLinks {
    pub links: Vec<RouteLink>,
    pub duplicates_removed: usize,
}

/// Drop repeated `(route_number, stop_id, direction)` links and renumber.
///
/// The first occurrence of a key is kept. Links without a stop id are kept
/// too, but only once per `(route_number, direction)`. Sequences restart at
/// 1 for every `(route_number, direction)` group and follow input order, so
/// they are contiguous after removal.
pub fn dedupe_and_sequence<I>(links: I) -> SequencedLinks
where
    I: IntoIterator<Item = RouteLink>,
{
    let mut seen: BTreeSet<(String, Option<String>, Direction)> = BTreeSet::new();
    let mut counters: BTreeMap<(String, Direction), u32> = BTreeMap::new();
    let mut kept = Vec::new();
    let mut duplicates_removed = 0;

    for mut link in links {
        let (route, stop_id, direction) = link.key();
        let key = (
            route.to_string(),
            stop_id.map(str::to_string),
            direction.clone(),
        );
        if !seen.insert(key) {
            duplicates_removed += 1;
            continue;
        }
        let counter = counters
            .entry((link.route_number.clone(), link.direction.clone()))
            .or_insert(0);
        *counter += 1;
        link.sequence = *counter;
        kept.push(link);
    }

    SequencedLinks {
        links: kept,
        duplicates_removed,
    }
}
