//! Transit stop reconciliation engine.
//!
//! - [`extract`]: stop codes embedded in stop names
//! - [`authority`]: code lookup tables of the rapid and rail registries
//! - [`resolve`]: canonical stop id selection
//! - [`sequence`]: route-link deduplication and sequence numbering
//! - [`pipeline`]: the full run over the three source registries

pub mod authority;
pub mod extract;
pub mod pipeline;
pub mod resolve;
pub mod sequence;

pub use authority::{AuthorityMap, AuthorityMaps, clean_code};
pub use extract::{CodeExtractor, Extraction};
pub use pipeline::{RunInput, RunOutput, run};
pub use resolve::{IdentityResolver, Resolution, ResolutionSource};
pub use sequence::{SequencedLinks, dedupe_and_sequence};
