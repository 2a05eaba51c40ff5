//! Stop codes embedded in stop names.

use std::collections::BTreeMap;

use regex::Regex;
use stopsync_model::AuthorityRecord;
use stopsync_rules::{CodePrefixes, Result};

/// Result of [`CodeExtractor::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Finds agency stop codes such as `KL 123` or `PJ-45` inside stop names.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    pattern: Regex,
    overrides: BTreeMap<String, String>,
}

impl CodeExtractor {
    pub fn new(prefixes: &CodePrefixes) -> Result<Self> {
        Ok(Self {
            pattern: prefixes.code_pattern()?,
            overrides: BTreeMap::new(),
        })
    }

    /// Add exact name to code overrides from a registry.
    ///
    /// Records lacking a name or a code are skipped; a later record replaces
    /// an earlier one with the same name.
    pub fn with_name_overrides<'a, I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = &'a AuthorityRecord>,
    {
        for record in records {
            let name = record.stop_name.as_deref().map(str::trim).unwrap_or("");
            let code = record.stop_code.as_deref().map(str::trim).unwrap_or("");
            if name.is_empty() || code.is_empty() {
                continue;
            }
            self.overrides.insert(name.to_string(), code.to_string());
        }
        self
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Split a raw stop name into an optional stop code and the residual
    /// name.
    ///
    /// ```
    /// use stopsync_core::CodeExtractor;
    /// use stopsync_rules::CodePrefixes;
    ///
    /// let extractor = CodeExtractor::new(&CodePrefixes::default()).unwrap();
    /// let extraction = extractor.extract(Some("KL 123, Jalan Ampang"));
    /// assert_eq!(extraction.code.as_deref(), Some("KL123"));
    /// assert_eq!(extraction.name.as_deref(), Some("Jalan Ampang"));
    /// ```
    pub fn extract(&self, raw_name: Option<&str>) -> Extraction {
        let Some(raw) = raw_name else {
            return Extraction::default();
        };
        let name = raw.trim();
        if name.is_empty() {
            return Extraction {
                code: None,
                name: Some(raw.to_string()),
            };
        }

        if let Some(code) = self.overrides.get(name) {
            return Extraction {
                code: Some(code.clone()),
                name: Some(name.to_string()),
            };
        }

        let Some(captures) = self.pattern.captures(name) else {
            return Extraction {
                code: None,
                name: Some(name.to_string()),
            };
        };
        let (Some(matched), Some(prefix), Some(digits)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            return Extraction {
                code: None,
                name: Some(name.to_string()),
            };
        };
        let code = format!("{}{}", prefix.as_str(), digits.as_str());

        let after = name[matched.end()..].trim_start();
        let residual = format!("{}{}", &name[..matched.start()], after);
        let residual =
            residual.trim_matches(|ch: char| ch.is_whitespace() || matches!(ch, ',' | '-'));

        let name = if residual.is_empty() { name } else { residual };
        Extraction {
            code: Some(code),
            name: Some(name.to_string()),
        }
    }
}
