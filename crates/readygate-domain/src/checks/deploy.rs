use crate::engine::FindingIds;
use readygate_types::{ids, AuthRule, Category, Finding, FunctionMeta, Severity};

pub(crate) fn run(
    functions: &[FunctionMeta],
    auth_rules: &[AuthRule],
    ids: &mut FindingIds,
    out: &mut Vec<Finding>,
) {
    // Global gate, computed once: one admin-gated rule anywhere in the
    // project suppresses every finding from this check.
    let admin_gated = auth_rules
        .iter()
        .any(|rule| rule.roles_allowed.iter().any(|role| role == "admin"));
    if admin_gated {
        return;
    }

    for function in functions {
        if function.is_destructive == Some(true) {
            out.push(Finding {
                id: ids.mint(),
                check_id: ids::CHECK_DEPLOY_UNPROTECTED_DESTRUCTIVE.to_string(),
                severity: Severity::Medium,
                category: Category::Deploy,
                title: format!(
                    "Destructive function \"{}\" lacks admin protection",
                    function.name
                ),
                evidence: format!(
                    "Function \"{}\" has isDestructive: true but no auth rule grants the admin role.",
                    function.name
                ),
                recommendation: format!(
                    "Add an auth rule that requires the admin role before executing destructive function \"{}\".",
                    function.name
                ),
            });
        }
    }
}
