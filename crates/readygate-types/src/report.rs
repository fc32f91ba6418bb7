use crate::metadata::BackendMetadata;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Severity is intentionally small: it maps directly to scoring weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Schema,
    Auth,
    Deploy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Unique within a single engine run only; intended for list keys and
    /// cross-referencing inside one report, never across reports.
    pub id: String,
    /// Stable dotted identifier, keys into the explain registry.
    pub check_id: String,
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub evidence: String,
    pub recommendation: String,
}

/// Severity-partition counts; always equals the findings cardinality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Summary::default();
        for finding in findings {
            match finding.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Insforge,
    Manual,
}

/// A persisted analysis. Created once, immutable thereafter; the store never
/// mutates or deletes a report on behalf of the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub slug: String,
    pub project_label: String,
    pub source_mode: SourceMode,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub readiness_score: u8,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    /// Retained only when the metadata was pasted in manually.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_metadata: Option<BackendMetadata>,
}

/// Report fields supplied by the caller; the store assigns `slug` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub project_label: String,
    pub source_mode: SourceMode,
    pub readiness_score: u8,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_metadata: Option<BackendMetadata>,
}
