//! Stop-code lookup tables built from the authority registries.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use stopsync_model::{Authority, AuthorityRecord};
use tracing::{debug, warn};

/// Code at the start of an authority stop name, e.g. `KJ15 Masjid Jamek`.
static LEADING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+\d+)").expect("Invalid leading code regex"));

/// Join code of an authority record.
///
/// A code leading the stop name takes precedence over the `stop_code` column.
pub fn clean_code(record: &AuthorityRecord) -> Option<String> {
    let leading = record
        .stop_name
        .as_deref()
        .and_then(|name| LEADING_CODE.captures(name.trim()))
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str().to_string());
    if leading.is_some() {
        return leading;
    }
    record
        .stop_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}

/// `clean_code -> registry id` for one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityMap {
    authority: Authority,
    by_code: BTreeMap<String, String>,
    collisions: usize,
}

impl AuthorityMap {
    /// Collapse records into a lookup table. On duplicate codes the last
    /// record wins.
    pub fn build<'a, I>(authority: Authority, records: I) -> Self
    where
        I: IntoIterator<Item = &'a AuthorityRecord>,
    {
        let mut by_code = BTreeMap::new();
        let mut collisions = 0;
        for record in records {
            let Some(code) = clean_code(record) else {
                continue;
            };
            let registry_id = record.registry_id.trim().to_string();
            let Some(previous) = by_code.insert(code.clone(), registry_id.clone()) else {
                continue;
            };
            if previous != registry_id {
                collisions += 1;
                debug!(
                    authority = %authority,
                    code = %code,
                    replaced = %previous,
                    registry_id = %registry_id,
                    "stop code collision"
                );
            }
        }
        if collisions > 0 {
            warn!(
                authority = %authority,
                collisions,
                "stop codes map to several registry ids, keeping the last"
            );
        }
        Self {
            authority,
            by_code,
            collisions,
        }
    }

    pub fn authority(&self) -> Authority {
        self.authority
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Number of codes whose registry id was replaced by a later record.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

/// Lookup tables for both authority registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityMaps {
    pub rapid: AuthorityMap,
    pub rail: AuthorityMap,
}

impl AuthorityMaps {
    pub fn build(rapid: &[AuthorityRecord], rail: &[AuthorityRecord]) -> Self {
        Self {
            rapid: AuthorityMap::build(Authority::Rapid, rapid),
            rail: AuthorityMap::build(Authority::Rail, rail),
        }
    }

    pub fn get(&self, authority: Authority) -> &AuthorityMap {
        match authority {
            Authority::Rapid => &self.rapid,
            Authority::Rail => &self.rail,
        }
    }

    /// Look `code` up in each registry in `order`, returning the first hit.
    pub fn lookup(&self, code: &str, order: [Authority; 2]) -> Option<(Authority, &str)> {
        order
            .into_iter()
            .map(|authority| self.get(authority))
            .find_map(|map| map.get(code).map(|id| (map.authority(), id)))
    }
}
