//! Reconciliation run over the three source registries.
//!
//! Stages run in order, each over the output of the previous one:
//!
//! 1. Build authority maps and the rail name overrides
//! 2. Build one stop record per distinct raw id; report rows without an id
//! 3. Extract embedded stop codes from stop names
//! 4. Resolve canonical stop ids
//! 5. Build route links with canonical ids
//! 6. Deduplicate route links and assign sequences
//! 7. Normalize stop and street names
//! 8. Report canonical ids shared by several stops

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use stopsync_model::{
    AuthorityRecord, Diagnostics, DuplicateStopId, GeneralStopRow, MissingStopId,
    NameNormalizationMode, ProcessingOptions, RouteClass, RouteLink, StopRecord, UnresolvedLink,
    UnresolvedStop,
};
use stopsync_normalization::NameNormalizer;
use stopsync_rules::{Result, RuleSet};
use tracing::{debug, info, info_span, warn};

use crate::authority::AuthorityMaps;
use crate::extract::CodeExtractor;
use crate::resolve::{IdentityResolver, ResolutionSource};
use crate::sequence::dedupe_and_sequence;

/// Rows of the three source registries.
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    pub general: Vec<GeneralStopRow>,
    pub rapid: Vec<AuthorityRecord>,
    pub rail: Vec<AuthorityRecord>,
}

/// Canonical tables and diagnostics of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutput {
    pub stops: Vec<StopRecord>,
    pub route_links: Vec<RouteLink>,
    pub diagnostics: Diagnostics,
}

/// Reconcile the source registries into canonical stop and route-link
/// tables.
///
/// Fails only when the configured code prefixes cannot be compiled.
pub fn run(input: &RunInput, rules: &RuleSet, options: &ProcessingOptions) -> Result<RunOutput> {
    let run_span = info_span!(
        "run",
        general_rows = input.general.len(),
        rapid_rows = input.rapid.len(),
        rail_rows = input.rail.len()
    );
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let mut diagnostics = Diagnostics {
        source_rows: input.general.len(),
        ..Diagnostics::default()
    };

    let (maps, extractor) = info_span!("authority").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let maps = AuthorityMaps::build(&input.rapid, &input.rail);
        let extractor = CodeExtractor::new(&rules.code_prefixes)?.with_name_overrides(&input.rail);
        info!(
            rapid_codes = maps.rapid.len(),
            rail_codes = maps.rail.len(),
            code_collisions = maps.rapid.collisions() + maps.rail.collisions(),
            name_overrides = extractor.override_count(),
            duration_ms = start.elapsed().as_millis(),
            "authority maps built"
        );
        Ok((maps, extractor))
    })?;

    let (mut stops, classes) = info_span!("stops").in_scope(|| {
        let start = Instant::now();
        let (stops, classes) = collect_stops(&input.general, rules);
        diagnostics.missing_stop_ids = missing_stop_ids(&input.general);
        for missing in &diagnostics.missing_stop_ids {
            warn!(
                route_number = %missing.route_number,
                stop_name = ?missing.stop_name,
                latitude = missing.latitude,
                longitude = missing.longitude,
                "registry row has no stop id"
            );
        }
        info!(
            stop_count = stops.len(),
            missing_ids = diagnostics.missing_stop_ids.len(),
            duration_ms = start.elapsed().as_millis(),
            "stop records built"
        );
        (stops, classes)
    });

    info_span!("extract").in_scope(|| {
        let start = Instant::now();
        let mut extracted = 0usize;
        for stop in &mut stops {
            let extraction = extractor.extract(stop.stop_name.as_deref());
            if extraction.code.is_some() {
                extracted += 1;
            }
            stop.stop_code = extraction.code;
            stop.stop_name = extraction.name;
        }
        info!(
            extracted,
            duration_ms = start.elapsed().as_millis(),
            "stop codes extracted"
        );
    });

    let raw_to_final = info_span!("resolve").in_scope(|| {
        let start = Instant::now();
        let resolver = IdentityResolver::new(&maps, options);
        let mut raw_to_final = BTreeMap::new();
        for (stop, class) in stops.iter_mut().zip(&classes) {
            let raw_id = stop.stop_id.clone();
            match resolver.resolve(stop, *class) {
                Some(resolution) => {
                    match resolution.source {
                        ResolutionSource::Native => diagnostics.native_stops += 1,
                        ResolutionSource::Authority(_) => diagnostics.resolved_stops += 1,
                    }
                    stop.stop_id = resolution.stop_id;
                }
                None => {
                    debug!(stop_id = %raw_id, code = ?stop.stop_code, "stop id unresolved");
                    diagnostics.unresolved_stops.push(UnresolvedStop {
                        stop_id: raw_id.clone(),
                        stop_name: stop.stop_name.clone(),
                        stop_code: stop.stop_code.clone(),
                        latitude: stop.latitude,
                        longitude: stop.longitude,
                        street_name: stop.street_name.clone(),
                    });
                }
            }
            raw_to_final.insert(raw_id, stop.stop_id.clone());
        }
        info!(
            native = diagnostics.native_stops,
            resolved = diagnostics.resolved_stops,
            unresolved = diagnostics.unresolved_stops.len(),
            duration_ms = start.elapsed().as_millis(),
            "stop ids resolved"
        );
        raw_to_final
    });

    let links = info_span!("route_links").in_scope(|| {
        let start = Instant::now();
        let code_to_final: BTreeMap<&str, &str> = stops
            .iter()
            .filter_map(|stop| {
                let code = stop.stop_code.as_deref()?;
                Some((code, stop.stop_id.as_str()))
            })
            .collect();
        let mut links = Vec::with_capacity(input.general.len());
        for row in &input.general {
            if options.is_excluded_route(&row.route_number) {
                diagnostics.excluded_rows += 1;
                continue;
            }
            let stop_id = row
                .stop_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|raw_id| {
                    link_stop_id(raw_id, &maps, &code_to_final, &raw_to_final, options)
                });
            if stop_id.is_none() {
                diagnostics.unresolved_links.push(UnresolvedLink {
                    route_number: row.route_number.clone(),
                    direction: row.direction.clone(),
                    zone: row.zone.clone(),
                });
            }
            links.push(RouteLink {
                route_number: row.route_number.clone(),
                stop_id,
                direction: row.direction.clone(),
                zone: row.zone.clone(),
                sequence: 0,
            });
        }
        info!(
            link_count = links.len(),
            excluded_rows = diagnostics.excluded_rows,
            unresolved = diagnostics.unresolved_links.len(),
            duration_ms = start.elapsed().as_millis(),
            "route links built"
        );
        links
    });

    let route_links = info_span!("sequence").in_scope(|| {
        let start = Instant::now();
        let sequenced = dedupe_and_sequence(links);
        diagnostics.duplicate_links = sequenced.duplicates_removed;
        info!(
            link_count = sequenced.links.len(),
            duplicates_removed = sequenced.duplicates_removed,
            duration_ms = start.elapsed().as_millis(),
            "route links sequenced"
        );
        sequenced.links
    });

    if options.name_normalization == NameNormalizationMode::Normalize {
        info_span!("normalize").in_scope(|| {
            let start = Instant::now();
            let normalizer = NameNormalizer::new(&rules.names);
            for stop in &mut stops {
                stop.stop_name = normalizer.normalize_stop_name(stop.stop_name.as_deref());
                stop.street_name = normalizer.normalize_street_name(stop.street_name.as_deref());
            }
            info!(
                stop_count = stops.len(),
                duration_ms = start.elapsed().as_millis(),
                "names normalized"
            );
        });
    }

    diagnostics.duplicate_stop_ids = duplicate_stop_ids(&stops);
    for duplicate in &diagnostics.duplicate_stop_ids {
        warn!(
            stop_id = %duplicate.stop_id,
            occurrences = duplicate.occurrences,
            "canonical stop id shared by several stops"
        );
    }

    info!(
        stop_count = stops.len(),
        link_count = route_links.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunOutput {
        stops,
        route_links,
        diagnostics,
    })
}

/// One stop record per distinct raw id, first occurrence wins, paired with
/// the class of the route it first appeared on.
fn collect_stops(rows: &[GeneralStopRow], rules: &RuleSet) -> (Vec<StopRecord>, Vec<RouteClass>) {
    let mut seen = BTreeSet::new();
    let mut stops = Vec::new();
    let mut classes = Vec::new();
    for row in rows {
        let Some(stop) = StopRecord::from_row(row) else {
            continue;
        };
        if !seen.insert(stop.stop_id.clone()) {
            continue;
        }
        classes.push(rules.feeder_routes.classify(&row.route_number));
        stops.push(stop);
    }
    (stops, classes)
}

/// Rows whose stop id is absent or blank, in input order.
fn missing_stop_ids(rows: &[GeneralStopRow]) -> Vec<MissingStopId> {
    rows.iter()
        .filter(|row| row.stop_id.as_deref().is_none_or(|id| id.trim().is_empty()))
        .map(|row| MissingStopId {
            route_number: row.route_number.clone(),
            stop_name: row.stop_name.clone(),
            latitude: row.latitude,
            longitude: row.longitude,
            street_name: row.street_name.clone(),
        })
        .collect()
}

/// Canonical id of a route-link stop.
///
/// Native ids are kept. Others are looked up as a code in the rapid and rail
/// maps, then as a code of a reconciled stop, then as a raw stop id. An id
/// found nowhere is kept unchanged.
fn link_stop_id(
    raw_id: &str,
    maps: &AuthorityMaps,
    code_to_final: &BTreeMap<&str, &str>,
    raw_to_final: &BTreeMap<String, String>,
    options: &ProcessingOptions,
) -> String {
    if options.is_native_id(raw_id) {
        return raw_id.to_string();
    }
    maps.rapid
        .get(raw_id)
        .or_else(|| maps.rail.get(raw_id))
        .or_else(|| code_to_final.get(raw_id).copied())
        .or_else(|| raw_to_final.get(raw_id).map(String::as_str))
        .unwrap_or(raw_id)
        .to_string()
}

fn duplicate_stop_ids(stops: &[StopRecord]) -> Vec<DuplicateStopId> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for stop in stops {
        *counts.entry(stop.stop_id.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, occurrences)| *occurrences > 1)
        .map(|(stop_id, occurrences)| DuplicateStopId {
            stop_id: stop_id.to_string(),
            occurrences,
        })
        .collect()
}
