use crate::checks;
use crate::score;
use readygate_types::{BackendMetadata, Finding, Summary};

/// The result of one engine run. Findings keep check execution order:
/// schema, then auth, then deploy, each in input order.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub findings: Vec<Finding>,
    pub score: u8,
    pub summary: Summary,
}

/// Run every check against the metadata and score the outcome.
///
/// Never fails: absent categories are skipped, and well-typed input always
/// produces a result. The only per-call state is the finding id counter.
pub fn evaluate(metadata: &BackendMetadata) -> Evaluation {
    let mut ids = FindingIds::default();
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(metadata, &mut ids, &mut findings);

    let summary = Summary::from_findings(&findings);
    let score = score::readiness_score(&summary);

    Evaluation {
        findings,
        score,
        summary,
    }
}

/// Mints finding ids unique within a single `evaluate` call. Sequential on
/// purpose: reruns on identical input produce byte-identical output.
#[derive(Debug, Default)]
pub(crate) struct FindingIds {
    next: u32,
}

impl FindingIds {
    pub(crate) fn mint(&mut self) -> String {
        self.next += 1;
        format!("f-{:03}", self.next)
    }
}
