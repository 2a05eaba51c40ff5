//! Rule set loading from TOML.
//!
//! A rules file may override any of the four sections; a missing section
//! keeps the built-in default.
//!
//! ```toml
//! uppercase = ["KL", "LRT"]
//! code_prefixes = ["KL", "PJ", "PPJ"]
//! feeder_routes = ["T100", "T101"]
//!
//! [street_types]
//! JLN = "Jalan"
//! LRG = "Lorong"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RulesError};
use crate::prefixes::CodePrefixes;
use crate::routes::FeederRoutes;
use crate::table::RuleTable;

/// Every rule table a run needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub names: RuleTable,
    pub code_prefixes: CodePrefixes,
    pub feeder_routes: FeederRoutes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    uppercase: Option<Vec<String>>,
    street_types: Option<BTreeMap<String, String>>,
    code_prefixes: Option<Vec<String>>,
    feeder_routes: Option<Vec<String>>,
}

/// Load a rule set from a TOML file.
pub fn load_rule_set(path: &Path) -> Result<RuleSet> {
    let text = std::fs::read_to_string(path).map_err(|source| RulesError::io(path, source))?;
    let file: RulesFile = toml::from_str(&text).map_err(|source| RulesError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = build_rule_set(file)?;
    debug!(
        path = %path.display(),
        uppercase = rules.names.uppercase_count(),
        street_types = rules.names.street_type_count(),
        code_prefixes = rules.code_prefixes.len(),
        feeder_routes = rules.feeder_routes.len(),
        "loaded rule set"
    );
    Ok(rules)
}

/// Load the rule set at `path`, or the built-in defaults when `None`.
pub fn load_rule_set_or_default(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => load_rule_set(path),
        None => Ok(RuleSet::default()),
    }
}

fn build_rule_set(file: RulesFile) -> Result<RuleSet> {
    let defaults = RuleSet::default();

    let names = match (file.uppercase, file.street_types) {
        (None, None) => defaults.names,
        (uppercase, street_types) => {
            if let Some(types) = &street_types {
                validate_street_types(types)?;
            }
            let uppercase: Vec<String> = match uppercase {
                Some(tokens) => tokens,
                None => defaults.names.uppercase_tokens().map(str::to_string).collect(),
            };
            let street_types: Vec<(String, String)> = match street_types {
                Some(types) => types.into_iter().collect(),
                None => defaults
                    .names
                    .street_types()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            };
            RuleTable::new(uppercase, street_types)
        }
    };

    let code_prefixes = match file.code_prefixes {
        Some(prefixes) => CodePrefixes::new(prefixes)?,
        None => defaults.code_prefixes,
    };

    let feeder_routes = match file.feeder_routes {
        Some(routes) => FeederRoutes::new(routes),
        None => defaults.feeder_routes,
    };

    Ok(RuleSet {
        names,
        code_prefixes,
        feeder_routes,
    })
}

fn validate_street_types(types: &BTreeMap<String, String>) -> Result<()> {
    for (key, value) in types {
        if key.trim().is_empty() {
            return Err(RulesError::InvalidStreetType {
                key: key.clone(),
                message: "abbreviation is empty".to_string(),
            });
        }
        if key.trim().contains(char::is_whitespace) {
            return Err(RulesError::InvalidStreetType {
                key: key.clone(),
                message: "abbreviation must be a single word".to_string(),
            });
        }
        if value.trim().is_empty() {
            return Err(RulesError::InvalidStreetType {
                key: key.clone(),
                message: "expansion is empty".to_string(),
            });
        }
    }
    Ok(())
}
