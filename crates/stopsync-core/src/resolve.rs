//! Canonical stop identity resolution.

use stopsync_model::{Authority, ProcessingOptions, RouteClass, StopRecord};
use tracing::debug;

use crate::authority::AuthorityMaps;

/// Where a canonical id came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The id already carried the native prefix and was kept.
    Native,
    /// The id was looked up in an authority registry.
    Authority(Authority),
}

/// A canonical stop id and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub stop_id: String,
    pub source: ResolutionSource,
}

/// Picks the canonical id of a stop from the authority registries.
///
/// Pure over the maps it borrows; the same record always resolves the same
/// way.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver<'a> {
    maps: &'a AuthorityMaps,
    options: &'a ProcessingOptions,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(maps: &'a AuthorityMaps, options: &'a ProcessingOptions) -> Self {
        Self { maps, options }
    }

    /// Resolve a stop record.
    ///
    /// 1. A native id is kept.
    /// 2. Without a stop code, the id itself is looked up in the rapid map,
    ///    then the rail map.
    /// 3. With a stop code, feeder routes look in the rail map first and other
    ///    routes in the rapid map first.
    ///
    /// Returns `None` when nothing matches.
    pub fn resolve(&self, record: &StopRecord, class: RouteClass) -> Option<Resolution> {
        let stop_id = record.stop_id.as_str();
        if self.options.is_native_id(stop_id) {
            return Some(Resolution {
                stop_id: stop_id.to_string(),
                source: ResolutionSource::Native,
            });
        }

        let code = record
            .stop_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());
        let (key, order) = match code {
            None => (stop_id, [Authority::Rapid, Authority::Rail]),
            Some(code) if class.is_feeder() => (code, [Authority::Rail, Authority::Rapid]),
            Some(code) => (code, [Authority::Rapid, Authority::Rail]),
        };

        let (authority, canonical) = self.maps.lookup(key, order)?;
        debug!(
            stop_id,
            key,
            authority = %authority,
            canonical,
            feeder = class.is_feeder(),
            "resolved stop id"
        );
        Some(Resolution {
            stop_id: canonical.to_string(),
            source: ResolutionSource::Authority(authority),
        })
    }
}

#[cfg(test)]
mod tests {
    use stopsync_model::AuthorityRecord;

    use super::*;

    fn maps() -> AuthorityMaps {
        AuthorityMaps::build(
            &[
                AuthorityRecord::new("1000100", Some("KL100"), None),
                AuthorityRecord::new("1000200", Some("N200"), None),
            ],
            &[
                AuthorityRecord::new("2000100", Some("KL100"), None),
                AuthorityRecord::new("2000300", Some("KJ300"), None),
            ],
        )
    }

    fn stop(stop_id: &str, code: Option<&str>) -> StopRecord {
        StopRecord {
            stop_id: stop_id.to_string(),
            stop_code: code.map(str::to_string),
            stop_name: None,
            street_name: None,
            latitude: 3.1,
            longitude: 101.6,
        }
    }

    #[test]
    fn feeder_routes_prefer_rail() {
        let maps = maps();
        let options = ProcessingOptions::default();
        let resolver = IdentityResolver::new(&maps, &options);
        let record = stop("N1", Some("KL100"));

        let feeder = resolver.resolve(&record, RouteClass::Feeder).expect("feeder");
        assert_eq!(feeder.stop_id, "2000100");
        assert_eq!(feeder.source, ResolutionSource::Authority(Authority::Rail));

        let regular = resolver.resolve(&record, RouteClass::Regular).expect("regular");
        assert_eq!(regular.stop_id, "1000100");
    }

    #[test]
    fn falls_back_to_other_registry() {
        let maps = maps();
        let options = ProcessingOptions::default();
        let resolver = IdentityResolver::new(&maps, &options);
        let resolved = resolver
            .resolve(&stop("N1", Some("KJ300")), RouteClass::Regular)
            .expect("rail fallback");
        assert_eq!(resolved.stop_id, "2000300");
    }

    #[test]
    fn native_id_is_never_remapped() {
        let maps = maps();
        let options = ProcessingOptions::default();
        let resolver = IdentityResolver::new(&maps, &options);
        let resolved = resolver
            .resolve(&stop("1999", Some("KL100")), RouteClass::Feeder)
            .expect("native");
        assert_eq!(resolved.stop_id, "1999");
        assert_eq!(resolved.source, ResolutionSource::Native);
    }

    #[test]
    fn id_lookup_without_code() {
        let maps = maps();
        let options = ProcessingOptions::default();
        let resolver = IdentityResolver::new(&maps, &options);
        let resolved = resolver
            .resolve(&stop("N200", None), RouteClass::Feeder)
            .expect("id lookup");
        assert_eq!(resolved.stop_id, "1000200");
    }

    #[test]
    fn unmatched_code_does_not_fall_back_to_id() {
        let maps = maps();
        let options = ProcessingOptions::default();
        let resolver = IdentityResolver::new(&maps, &options);
        assert_eq!(resolver.resolve(&stop("N200", Some("SA1")), RouteClass::Regular), None);
        assert_eq!(resolver.resolve(&stop("N9", None), RouteClass::Regular), None);
    }
}
