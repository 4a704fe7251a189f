/// Route module for file-based routing
///
/// Contains pure functional components for turning page file paths into route segments:
/// - `pattern`: classifies a single file or directory name
/// - `parser`: splits a page path into classified segments and scores priority

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{calculate_priority, parse_segments};
pub use pattern::{classify_segment, PatternSegmentType};
