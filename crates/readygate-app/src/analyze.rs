//! The `analyze` use case: materialize metadata, evaluate, persist.

use anyhow::Context;
use readygate_store::ReportStore;
use readygate_types::{ReportDraft, SourceMode, Summary};

/// Where the metadata comes from.
#[derive(Clone, Debug)]
pub enum MetadataInput {
    /// Fetch from an InsForge deployment.
    Insforge { base_url: String, api_key: String },
    /// Pasted or piped JSON text.
    Manual { metadata_json: String },
}

/// Input for the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeInput {
    /// Human-readable label attached to the stored report.
    pub project_label: String,
    pub metadata: MetadataInput,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub slug: String,
    pub score: u8,
    pub summary: Summary,
}

/// Run the analyze use case: validate input, obtain metadata, evaluate,
/// save a report, return its slug.
///
/// Metadata acquisition failures surface here with context and never reach
/// the engine; the engine itself cannot fail on parsed input.
pub fn run_analyze(input: AnalyzeInput, store: &dyn ReportStore) -> anyhow::Result<AnalyzeOutput> {
    let project_label = input.project_label.trim();
    if project_label.is_empty() {
        anyhow::bail!("project label must not be empty");
    }

    let (metadata, source_mode) = match &input.metadata {
        MetadataInput::Insforge { base_url, api_key } => {
            let metadata = readygate_source::fetch(base_url, api_key)
                .context("fetch metadata from InsForge")?;
            (metadata, SourceMode::Insforge)
        }
        MetadataInput::Manual { metadata_json } => {
            let metadata =
                readygate_source::parse(metadata_json).context("parse metadata JSON")?;
            (metadata, SourceMode::Manual)
        }
    };

    let evaluation = readygate_domain::evaluate(&metadata);

    // Raw metadata is retained only when the caller pasted it in themselves;
    // fetched metadata belongs to the deployment, not the report.
    let raw_metadata = match source_mode {
        SourceMode::Manual => Some(metadata),
        SourceMode::Insforge => None,
    };

    let draft = ReportDraft {
        project_label: project_label.to_string(),
        source_mode,
        readiness_score: evaluation.score,
        summary: evaluation.summary,
        findings: evaluation.findings,
        raw_metadata,
    };

    let slug = store.save(draft).context("save report")?;

    Ok(AnalyzeOutput {
        slug,
        score: evaluation.score,
        summary: evaluation.summary,
    })
}
