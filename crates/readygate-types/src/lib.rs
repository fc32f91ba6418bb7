//! Stable DTOs and IDs used across the readygate workspace.
//!
//! This crate is intentionally boring:
//! - data types for backend metadata, findings, and stored reports
//! - stable string check IDs
//! - explain registry for remediation guidance
//! - the canonical sample metadata used by docs and tests

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod metadata;
pub mod report;
pub mod sample;

pub use explain::{all_check_ids, lookup_explanation, ExamplePair, Explanation};
pub use metadata::{AuthRule, BackendMetadata, Column, ForeignKey, FunctionMeta, Table};
pub use report::{
    Category, Finding, Report, ReportDraft, Severity, SourceMode, Summary,
};
pub use sample::sample_metadata;
