//! Stop and street name normalization.

use std::sync::LazyLock;

use regex::Regex;
use stopsync_rules::RuleTable;

use crate::casing::{case_street_word, case_word, push_upper_char};
use crate::tokenizer::{Segment, tokenize};

/// Leading modality marker such as `(M)` or `(M2)`.
static MODALITY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\(\s*M\d?\s*\)\s*").expect("Invalid modality marker regex")
});

/// Normalizes stop and street names against a [`RuleTable`].
///
/// Normalization is idempotent: a normalized name is a fixed point.
#[derive(Debug, Clone, Copy)]
pub struct NameNormalizer<'a> {
    rules: &'a RuleTable,
}

impl<'a> NameNormalizer<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Normalize an optional stop name; `None` passes through.
    pub fn normalize_stop_name(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|name| self.stop_name(name))
    }

    /// Normalize an optional street name; `None` passes through.
    pub fn normalize_street_name(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|name| self.street_name(name))
    }

    /// Normalize a stop name.
    ///
    /// ```
    /// use stopsync_normalization::NameNormalizer;
    /// use stopsync_rules::RuleTable;
    ///
    /// let rules = RuleTable::new(["LRT"], [("LRG", "Lorong")]);
    /// let normalizer = NameNormalizer::new(&rules);
    /// assert_eq!(normalizer.stop_name("(M) lrg bukit (a)"), "Lorong Bukit (A)");
    /// ```
    pub fn stop_name(&self, raw: &str) -> String {
        let text = strip_modality_markers(raw.trim());

        let mut rendered = String::with_capacity(text.len() + 8);
        let mut previous_word = false;
        for segment in tokenize(text) {
            match segment {
                Segment::Word(word) => {
                    if previous_word {
                        rendered.push(' ');
                    }
                    rendered.push_str(&case_word(word, self.rules));
                    previous_word = true;
                }
                Segment::Separator(separator) => {
                    rendered.push(separator);
                    previous_word = false;
                }
                Segment::Bracket(inner) => {
                    rendered.push_str(" (");
                    self.render_bracket(inner, &mut rendered);
                    rendered.push_str(") ");
                    previous_word = false;
                }
            }
        }
        collapse_whitespace(&rendered)
    }

    /// Normalize a street name: whitespace-split words, expansion or
    /// capitalization, single spaces.
    pub fn street_name(&self, raw: &str) -> String {
        raw.split_whitespace()
            .map(|word| case_street_word(word, self.rules))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_bracket(&self, inner: &str, out: &mut String) {
        let inner = inner.trim();
        let mut chars = inner.chars();
        if let (Some(single), None) = (chars.next(), chars.next()) {
            push_upper_char(out, single);
            return;
        }
        let words: Vec<String> = inner
            .split_whitespace()
            .map(|word| case_word(word, self.rules))
            .collect();
        out.push_str(&words.join(" "));
    }
}

fn strip_modality_markers(mut text: &str) -> &str {
    while let Some(found) = MODALITY_MARKER.find(text) {
        text = &text[found.end()..];
    }
    text
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleTable {
        RuleTable::new(
            ["KL", "KLCC", "LRT", "MRT"],
            [("JLN", "Jalan"), ("LRG", "Lorong"), ("TMN", "Taman")],
        )
    }

    #[test]
    fn single_letter_bracket_and_abbreviation() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.stop_name("lrg bukit (a)"), "Lorong Bukit (A)");
    }

    #[test]
    fn strips_leading_modality_markers() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.stop_name("(M) klcc"), "KLCC");
        assert_eq!(normalizer.stop_name("  (m2)(M) lrt ampang"), "LRT Ampang");
        assert_eq!(normalizer.stop_name("( m ) pasar"), "Pasar");
    }

    #[test]
    fn lowercase_marker_is_stripped_to_stay_a_fixed_point() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        for raw in ["(m) pasar", "( M ) pasar", "(m3) pasar"] {
            let once = normalizer.stop_name(raw);
            assert_eq!(once, "Pasar");
            assert_eq!(normalizer.stop_name(&once), once);
        }
    }

    #[test]
    fn marker_after_text_is_a_bracket() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.stop_name("pasar seni (m)"), "Pasar Seni (M)");
    }

    #[test]
    fn separators_join_without_spaces() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(
            normalizer.stop_name("jln ampang / jln tun razak"),
            "Jalan Ampang/Jalan Tun Razak"
        );
        assert_eq!(
            normalizer.stop_name("hentian  bas - pasar seni"),
            "Hentian Bas-Pasar Seni"
        );
    }

    #[test]
    fn multi_word_bracket_uses_word_rule() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(
            normalizer.stop_name("stesen lrt kelana jaya(arah  tmn  jaya)"),
            "Stesen LRT Kelana Jaya (Arah Taman Jaya)"
        );
    }

    #[test]
    fn bracket_content_keeps_separators() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.stop_name("kl sentral (a-b)"), "KL Sentral (A-b)");
    }

    #[test]
    fn street_name_expands_without_uppercase_tokens() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.street_name("  jln   klcc "), "Jalan Klcc");
        assert_eq!(normalizer.street_name("lrg/3 (b)"), "Lrg/3 (b)");
    }

    #[test]
    fn missing_names_pass_through() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.normalize_stop_name(None), None);
        assert_eq!(normalizer.normalize_street_name(None), None);
        assert_eq!(
            normalizer.normalize_stop_name(Some("tmn melati")),
            Some("Taman Melati".to_string())
        );
    }

    #[test]
    fn blank_name_becomes_empty() {
        let rules = rules();
        let normalizer = NameNormalizer::new(&rules);
        assert_eq!(normalizer.stop_name("   "), "");
        assert_eq!(normalizer.street_name(""), "");
    }
}
