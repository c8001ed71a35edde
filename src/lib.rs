// src/lib.rs
// Entity-resolution engine for judicial organizational-unit (OJ) names.
//
// The host application supplies the canonical reference dataset and any
// externally-retrieved name lists as plain string collections; everything
// here is synchronous, in-memory string processing. "No match" is data, not
// an error: resolution echoes its input and reconciliation files the item
// under missing/extra.

pub mod matching;
pub mod utils;

pub use matching::equivalence::equivalent;
pub use matching::index::ReferenceIndex;
pub use matching::reconcile::compare_lists_of_names;
pub use matching::resolver::{resolve, resolve_bulk, resolve_detailed};
pub use matching::types::{
    BulkResolution, ComparisonResult, MatchMethodType, ResolveOutcome, Specialty,
    UnitNameComponents, UnitType,
};
pub use matching::variants::generate_variants;
pub use utils::matcher_config::MatcherConfig;
