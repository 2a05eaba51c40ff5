use proptest::prelude::*;
use stopsync_normalization::NameNormalizer;
use stopsync_rules::RuleTable;

fn name_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("jln".to_string()),
        Just("LRG".to_string()),
        Just("kl".to_string()),
        Just("(m)".to_string()),
        Just("(M2)".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("()".to_string()),
        Just("/".to_string()),
        Just("-".to_string()),
        "[a-zA-Z0-9]{1,8}",
        "\\([a-z ]{0,6}\\)",
    ]
}

fn glued_name() -> impl Strategy<Value = String> {
    prop::collection::vec((name_piece(), prop_oneof![Just(""), Just(" "), Just("  ")]), 0..10)
        .prop_map(|pieces| {
            pieces
                .into_iter()
                .map(|(piece, gap)| format!("{piece}{gap}"))
                .collect()
        })
}

proptest! {
    #[test]
    fn stop_names_are_fixed_points(raw in glued_name()) {
        let rules = RuleTable::default();
        let normalizer = NameNormalizer::new(&rules);
        let once = normalizer.stop_name(&raw);
        prop_assert_eq!(normalizer.stop_name(&once), once);
    }

    #[test]
    fn arbitrary_ascii_stop_names_are_fixed_points(raw in "[ -~]{0,40}") {
        let rules = RuleTable::default();
        let normalizer = NameNormalizer::new(&rules);
        let once = normalizer.stop_name(&raw);
        prop_assert_eq!(normalizer.stop_name(&once), once);
    }

    #[test]
    fn street_names_are_fixed_points(raw in "[ -~]{0,40}") {
        let rules = RuleTable::default();
        let normalizer = NameNormalizer::new(&rules);
        let once = normalizer.street_name(&raw);
        prop_assert_eq!(normalizer.street_name(&once), once);
    }

    #[test]
    fn output_has_no_edge_or_double_spaces(raw in glued_name()) {
        let rules = RuleTable::default();
        let normalized = NameNormalizer::new(&rules).stop_name(&raw);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }
}

#[test]
fn default_rules_on_typical_names() {
    let rules = RuleTable::default();
    let normalizer = NameNormalizer::new(&rules);
    let names = [
        "(M) stesen lrt klcc",
        "jln ampang / jln tun razak",
        "tmn melati (b)",
        "kg baru-pintu a",
        "hentian bas   sek 7 (arah utara)",
        "bkt bintang",
    ];
    let normalized: Vec<String> = names.iter().map(|name| normalizer.stop_name(name)).collect();
    insta::assert_snapshot!(normalized.join("\n"), @r###"
Stesen LRT KLCC
Jalan Ampang/Jalan Tun Razak
Taman Melati (B)
Kampung Baru-Pintu A
Hentian Bas Seksyen 7 (Arah Utara)
Bukit Bintang
"###);
}
