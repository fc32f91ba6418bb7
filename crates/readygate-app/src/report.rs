//! The report lookup use case.

use anyhow::Context;
use readygate_store::ReportStore;
use readygate_types::Report;

/// Load a stored report by slug.
///
/// `Ok(None)` means the slug is unknown; callers render that as "not found",
/// distinct from store failures, which come back as `Err`.
pub fn fetch_report(store: &dyn ReportStore, slug: &str) -> anyhow::Result<Option<Report>> {
    store
        .get(slug)
        .with_context(|| format!("load report {slug}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{run_analyze, AnalyzeInput, MetadataInput};
    use camino::Utf8PathBuf;
    use readygate_store::JsonFileStore;

    #[test]
    fn round_trips_through_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("reports.json"))
            .expect("utf8 temp path");
        let store = JsonFileStore::new(path);

        let output = run_analyze(
            AnalyzeInput {
                project_label: "demo".to_string(),
                metadata: MetadataInput::Manual {
                    metadata_json: "{}".to_string(),
                },
            },
            &store,
        )
        .expect("analyze");

        let report = fetch_report(&store, &output.slug)
            .expect("fetch")
            .expect("present");
        assert_eq!(report.readiness_score, 100);
        assert!(report.findings.is_empty());

        assert!(fetch_report(&store, "nope42").expect("fetch").is_none());
    }
}
