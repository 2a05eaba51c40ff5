//! Casing rule table for stop and street names.

use std::collections::{BTreeMap, BTreeSet};

use crate::defaults::{STREET_TYPES, UPPERCASE_TOKENS};

/// Forced-uppercase tokens and street-type abbreviations.
///
/// Keys are stored uppercase; lookups take the uppercase form of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    uppercase: BTreeSet<String>,
    street_types: BTreeMap<String, String>,
}

impl RuleTable {
    /// Build a table. Blank tokens and abbreviations are ignored.
    pub fn new<U, S, K, V>(uppercase: U, street_types: S) -> Self
    where
        U: IntoIterator,
        U::Item: AsRef<str>,
        S: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let uppercase = uppercase
            .into_iter()
            .map(|token| token.as_ref().trim().to_uppercase())
            .filter(|token| !token.is_empty())
            .collect();
        let street_types = street_types
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.as_ref().trim().to_uppercase();
                let value = value.as_ref().trim();
                (!key.is_empty() && !value.is_empty()).then(|| (key, value.to_string()))
            })
            .collect();
        Self {
            uppercase,
            street_types,
        }
    }

    /// An empty table; every word falls through to default capitalization.
    pub fn empty() -> Self {
        Self {
            uppercase: BTreeSet::new(),
            street_types: BTreeMap::new(),
        }
    }

    /// Whether the uppercase form of a word must render uppercase.
    pub fn is_uppercase(&self, upper: &str) -> bool {
        self.uppercase.contains(upper)
    }

    /// Expansion for the uppercase form of a street-type abbreviation.
    pub fn street_type(&self, upper: &str) -> Option<&str> {
        self.street_types.get(upper).map(String::as_str)
    }

    pub fn uppercase_tokens(&self) -> impl Iterator<Item = &str> {
        self.uppercase.iter().map(String::as_str)
    }

    pub fn street_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.street_types
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn uppercase_count(&self) -> usize {
        self.uppercase.len()
    }

    pub fn street_type_count(&self) -> usize {
        self.street_types.len()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(UPPERCASE_TOKENS.iter(), STREET_TYPES.iter().copied())
    }
}
