use readygate_types::{Category, Report, Severity, SourceMode};
use time::format_description::well_known::Rfc3339;

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Readiness report: {}\n\n", report.project_label));

    out.push_str(&format!("- Score: **{}/100**\n", report.readiness_score));
    let source = match report.source_mode {
        SourceMode::Insforge => "insforge",
        SourceMode::Manual => "manual",
    };
    out.push_str(&format!("- Source: {} (`{}`)\n", source, report.slug));
    if let Ok(created_at) = report.created_at.format(&Rfc3339) {
        out.push_str(&format!("- Created: {}\n", created_at));
    }
    out.push_str(&format!(
        "- Findings: {} high / {} medium / {} low\n\n",
        report.summary.high, report.summary.medium, report.summary.low
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for finding in &report.findings {
        let severity = match finding.severity {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        };
        let category = match finding.category {
            Category::Schema => "SCHEMA",
            Category::Auth => "AUTH",
            Category::Deploy => "DEPLOY",
        };

        out.push_str(&format!(
            "- [{}] [{}] `{}` — {}\n",
            severity, category, finding.check_id, finding.title
        ));
        out.push_str(&format!("  - evidence: {}\n", finding.evidence));
        out.push_str(&format!("  - recommendation: {}\n", finding.recommendation));
    }

    out
}
