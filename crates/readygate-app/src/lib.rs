//! Application use cases wiring source, engine, store, and render.
//!
//! Nothing in here evaluates rules itself; this crate sequences the
//! collaborators and owns the validation and error taxonomy around them.

#![forbid(unsafe_code)]

mod analyze;
mod explain;
mod report;

pub use analyze::{run_analyze, AnalyzeInput, AnalyzeOutput, MetadataInput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use report::fetch_report;
