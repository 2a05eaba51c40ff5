//! Agency prefixes of embedded stop codes.

use regex::Regex;

use crate::defaults::CODE_PREFIXES;
use crate::error::{Result, RulesError};

/// Ordered list of agency prefixes.
///
/// Scan order keeps the configured order, except that a prefix is moved
/// ahead of any shorter prefix it contains (`PPJ` before `PJ`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePrefixes {
    ordered: Vec<String>,
}

impl CodePrefixes {
    /// Validate and order a prefix list.
    ///
    /// Prefixes must be non-empty ASCII letters. Duplicates keep their first
    /// position.
    pub fn new<I>(prefixes: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut configured = Vec::new();
        for raw in prefixes {
            let prefix = raw.as_ref().trim();
            if prefix.is_empty() {
                return Err(RulesError::InvalidPrefix {
                    prefix: raw.as_ref().to_string(),
                    message: "prefix is empty".to_string(),
                });
            }
            if !prefix.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(RulesError::InvalidPrefix {
                    prefix: prefix.to_string(),
                    message: "prefix must contain only ASCII letters".to_string(),
                });
            }
            configured.push(prefix.to_string());
        }
        Ok(Self {
            ordered: scan_order(configured),
        })
    }

    /// Prefixes in scan order.
    pub fn scan_order(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Compile the embedded-code pattern `(PREFIX)[\s-]*(\d+)`.
    ///
    /// Group 1 is the prefix, group 2 the digits.
    pub fn code_pattern(&self) -> Result<Regex> {
        let alternation = self
            .ordered
            .iter()
            .map(String::as_str)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = if alternation.is_empty() {
            // Never matches.
            r"\b\B".to_string()
        } else {
            format!(r"({alternation})[\s-]*(\d+)")
        };
        Ok(Regex::new(&pattern)?)
    }
}

impl Default for CodePrefixes {
    fn default() -> Self {
        Self {
            ordered: scan_order(CODE_PREFIXES.iter().copied().map(String::from)),
        }
    }
}

fn scan_order(configured: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut ordered: Vec<String> = Vec::new();
    for prefix in configured {
        if ordered.contains(&prefix) {
            continue;
        }
        let position = ordered.iter().position(|existing| {
            prefix.len() > existing.len() && prefix.contains(existing.as_str())
        });
        match position {
            Some(index) => ordered.insert(index, prefix),
            None => ordered.push(prefix),
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_prefix_moves_ahead_of_contained_prefix() {
        let prefixes = CodePrefixes::default();
        let order: Vec<&str> = prefixes.scan_order().collect();
        let ppj = order.iter().position(|p| *p == "PPJ").expect("PPJ");
        let pj = order.iter().position(|p| *p == "PJ").expect("PJ");
        assert!(ppj < pj);
        assert_eq!(order[0], "KL");
        assert_eq!(order.len(), 12);
    }

    #[test]
    fn unrelated_prefixes_keep_configured_order() {
        let prefixes = CodePrefixes::new(["SP", "AJ", "KS"]).expect("prefixes");
        let order: Vec<&str> = prefixes.scan_order().collect();
        assert_eq!(order, vec!["SP", "AJ", "KS"]);
    }

    #[test]
    fn rejects_non_alphabetic_prefix() {
        let err = CodePrefixes::new(["K1"]).unwrap_err();
        assert!(matches!(err, RulesError::InvalidPrefix { .. }));
        assert!(CodePrefixes::new([""]).is_err());
    }

    #[test]
    fn pattern_captures_prefix_and_digits() {
        let pattern = CodePrefixes::default().code_pattern().expect("pattern");
        let caps = pattern.captures("Hentian PPJ - 12 Putrajaya").expect("match");
        assert_eq!(&caps[1], "PPJ");
        assert_eq!(&caps[2], "12");
    }

    #[test]
    fn empty_prefix_list_matches_nothing() {
        let pattern = CodePrefixes::new(Vec::<String>::new())
            .expect("prefixes")
            .code_pattern()
            .expect("pattern");
        assert!(!pattern.is_match("KL123"));
    }
}
