pub mod extract;
pub mod parser;
pub mod types;

// Re-export main types
pub use extract::{extract_candidates, normalize_classes};
pub use parser::{parse_candidate, split_modifier, ParseError};
pub use types::{ArbitraryValue, Candidate, ParsedModifier, ParsedValue, UtilitySplit};
