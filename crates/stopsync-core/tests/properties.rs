use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use stopsync_core::{CodeExtractor, RunInput, dedupe_and_sequence, run};
use stopsync_model::{AuthorityRecord, Direction, GeneralStopRow, ProcessingOptions, RouteLink};
use stopsync_rules::{CodePrefixes, RuleSet};

fn route_link() -> impl Strategy<Value = RouteLink> {
    (0..3u8, prop::option::weighted(0.9, 0..6u8), 0..2u8).prop_map(|(route, stop, direction)| {
        RouteLink {
            route_number: format!("R{route}"),
            stop_id: stop.map(|stop| format!("S{stop}")),
            direction: Direction::parse(&direction.to_string()),
            zone: "1".to_string(),
            sequence: 0,
        }
    })
}

fn general_row() -> impl Strategy<Value = GeneralStopRow> {
    let id = prop::option::weighted(0.9, prop_oneof!["N[0-9]", "1[0-9]{2}", "KL[0-9]"]);
    let name = prop_oneof![
        Just("KL 1, jln ampang".to_string()),
        Just("PJ-2 tmn (a)".to_string()),
        Just("MRT Kwasa Sentral".to_string()),
        "[a-zA-Z ]{0,12}",
    ];
    let route = prop_oneof![Just("T100"), Just("U80"), Just("U80 (OS)")];
    (id, name, route, 0..2u8).prop_map(|(stop_id, name, route, direction)| GeneralStopRow {
        stop_id,
        stop_name: Some(name),
        street_name: None,
        latitude: 3.0,
        longitude: 101.0,
        route_number: route.to_string(),
        direction: Direction::parse(&direction.to_string()),
        zone: "1".to_string(),
    })
}

fn authorities() -> (Vec<AuthorityRecord>, Vec<AuthorityRecord>) {
    (
        vec![
            AuthorityRecord::new("1000001", Some("KL1"), None),
            AuthorityRecord::new("1000002", Some("PJ2"), None),
        ],
        vec![
            AuthorityRecord::new("2000001", Some("KL1"), Some("MRT Kwasa Sentral")),
            AuthorityRecord::new("2000009", Some("N9"), None),
        ],
    )
}

proptest! {
    #[test]
    fn sequences_are_contiguous_per_group(links in prop::collection::vec(route_link(), 0..40)) {
        let sequenced = dedupe_and_sequence(links);
        let mut groups: BTreeMap<(String, Direction), Vec<u32>> = BTreeMap::new();
        for link in &sequenced.links {
            groups
                .entry((link.route_number.clone(), link.direction.clone()))
                .or_default()
                .push(link.sequence);
        }
        for sequences in groups.values() {
            let expected: Vec<u32> = (1..=sequences.len() as u32).collect();
            prop_assert_eq!(sequences, &expected);
        }
    }

    #[test]
    fn link_keys_are_unique(links in prop::collection::vec(route_link(), 0..40)) {
        let input_len = links.len();
        let sequenced = dedupe_and_sequence(links);
        let mut keys = BTreeSet::new();
        for link in &sequenced.links {
            prop_assert!(keys.insert(link.key()));
        }
        prop_assert_eq!(sequenced.links.len() + sequenced.duplicates_removed, input_len);
    }

    #[test]
    fn extraction_is_deterministic(name in "[A-Z0-9 ,-]{0,16}") {
        let extractor = CodeExtractor::new(&CodePrefixes::default()).expect("extractor");
        let first = extractor.extract(Some(&name));
        let second = extractor.extract(Some(&name));
        prop_assert_eq!(&first, &second);
        if let Some(code) = &first.code {
            prop_assert!(code.chars().last().is_some_and(|ch| ch.is_ascii_digit()));
            prop_assert!(!first.name.as_deref().unwrap_or("").is_empty());
        }
    }

    #[test]
    fn runs_are_deterministic(general in prop::collection::vec(general_row(), 0..20)) {
        let (rapid, rail) = authorities();
        let input = RunInput { general, rapid, rail };
        let rules = RuleSet::default();
        let options = ProcessingOptions::default();
        let first = run(&input, &rules, &options).expect("run");
        let second = run(&input, &rules, &options).expect("run");
        prop_assert_eq!(&first, &second);

        let stop_ids: BTreeSet<&str> = input
            .general
            .iter()
            .filter_map(|row| row.stop_id.as_deref())
            .collect();
        prop_assert_eq!(first.stops.len(), stop_ids.len());
        prop_assert_eq!(
            first.diagnostics.unresolved_stops.len()
                + first.diagnostics.resolved_stops
                + first.diagnostics.native_stops,
            first.stops.len()
        );
    }
}
