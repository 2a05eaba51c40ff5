//! Name normalization for transit stops.
//!
//! Stop names are scanned into words, `/` and `-` separators and bracket
//! groups ([`tokenizer`]), then each word is cased with the rules of a
//! [`stopsync_rules::RuleTable`] ([`casing`]). Street names use the plain
//! word rule only.

pub mod casing;
pub mod normalizer;
pub mod tokenizer;

pub use casing::{capitalize, case_street_word, case_word};
pub use normalizer::NameNormalizer;
pub use tokenizer::{Segment, tokenize};
