//! Per-word casing rules.

use stopsync_rules::RuleTable;

/// Apply the stop-name word rule.
///
/// Forced-uppercase tokens render uppercase, street-type abbreviations render
/// as their expansion, anything else is capitalized.
pub fn case_word(word: &str, rules: &RuleTable) -> String {
    let upper = word.to_uppercase();
    if rules.is_uppercase(&upper) {
        return upper;
    }
    case_street_word_upper(word, &upper, rules)
}

/// Apply the street-name word rule: abbreviation expansion or capitalization.
pub fn case_street_word(word: &str, rules: &RuleTable) -> String {
    case_street_word_upper(word, &word.to_uppercase(), rules)
}

fn case_street_word_upper(word: &str, upper: &str, rules: &RuleTable) -> String {
    match rules.street_type(upper) {
        Some(expansion) => expansion.to_string(),
        None => capitalize(word),
    }
}

/// First character uppercase, the rest lowercase.
///
/// A first character whose uppercase form is several characters (`ß`) is
/// kept as is, so capitalizing twice gives the same word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    push_upper_char(&mut out, first);
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Uppercase a single character, keeping it when the mapping is not 1:1.
pub fn push_upper_char(out: &mut String, ch: char) {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleTable {
        RuleTable::new(["KL", "LRT"], [("JLN", "Jalan"), ("LRG", "Lorong")])
    }

    #[test]
    fn uppercase_tokens_win_over_expansion() {
        let rules = RuleTable::new(["JLN"], [("JLN", "Jalan")]);
        assert_eq!(case_word("jln", &rules), "JLN");
        assert_eq!(case_street_word("jln", &rules), "Jalan");
    }

    #[test]
    fn word_rule() {
        let rules = rules();
        assert_eq!(case_word("kl", &rules), "KL");
        assert_eq!(case_word("Lrg", &rules), "Lorong");
        assert_eq!(case_word("AMPANG", &rules), "Ampang");
    }

    #[test]
    fn street_rule_skips_uppercase_tokens() {
        assert_eq!(case_street_word("lrt", &rules()), "Lrt");
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("1st"), "1st");
        assert_eq!(capitalize("(utara"), "(utara");
        assert_eq!(capitalize("straße"), "Straße");
        assert_eq!(capitalize("ßx"), "ßx");
    }
}
