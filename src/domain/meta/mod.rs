//! Meta-tag engine

pub mod lookup;
pub mod structural;
pub mod traversal;

// Re-export main types
pub use lookup::TagLookup;
pub use structural::{is_heritable, is_structural};
pub use traversal::MetaTagResolver;
