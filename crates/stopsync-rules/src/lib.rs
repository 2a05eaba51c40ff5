//! Rule tables for transit stop reconciliation.
//!
//! - [`RuleTable`]: forced-uppercase tokens and street-type abbreviations
//!   used by name normalization
//! - [`CodePrefixes`]: agency prefixes of stop codes embedded in names
//! - [`FeederRoutes`]: routes whose stops are keyed in the rail registry
//!
//! All tables have built-in defaults and can be overridden from a TOML file
//! with [`load_rule_set`].

#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod loader;
pub mod prefixes;
pub mod routes;
pub mod table;

pub use error::{Result, RulesError};
pub use loader::{RuleSet, load_rule_set, load_rule_set_or_default};
pub use prefixes::CodePrefixes;
pub use routes::FeederRoutes;
pub use table::RuleTable;
