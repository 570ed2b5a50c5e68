//! README Signal Extraction
//!
//! Heuristic parsing of loosely structured Markdown into structured signals.
//!
//! ## Modules
//!
//! - `link`: First well-formed URL in a fragment
//! - `key_value`: `key: value` / `key = value` lines with substring lookups
//! - `heading`: Flat heading segments (levels 1-5) with substring lookups
//! - `signals`: Project type, deployment details, header checklist
//!
//! Every parser is a total function: arbitrary text yields an empty or
//! `Unknown` result, never an error.

pub mod heading;
pub mod key_value;
pub mod link;
pub mod signals;

pub use heading::{HeadingPresence, HeadingSegment, HeadingStore};
pub use key_value::{KeyValueEntry, KeyValueStore};
pub use link::find_first_link;
pub use signals::{
    DeploymentDetails, HeaderChecklist, ProjectType, ReadmeSignals, analyze,
    build_header_checklist, classify_project_type, extract_deployment_details,
};
