//! resolves semantic fields against whatever header text a dataset was published with.
mod field_candidates;
mod normalize;
mod schema_index;

pub use field_candidates::FieldCandidates;
pub use normalize::normalize_header;
pub use schema_index::{resolve, SchemaIndex};
