use crate::engine::FindingIds;
use readygate_types::{ids, AuthRule, Category, Finding, Severity};

/// Methods that mutate state; matched after uppercasing the rule's method.
const WRITE_METHODS: [&str; 4] = ["POST", "PUT", "PATCH", "DELETE"];

pub(crate) fn run(rules: &[AuthRule], ids: &mut FindingIds, out: &mut Vec<Finding>) {
    for rule in rules {
        let method = rule.method.to_ascii_uppercase();

        if WRITE_METHODS.contains(&method.as_str()) && !rule.requires_auth {
            out.push(Finding {
                id: ids.mint(),
                check_id: ids::CHECK_AUTH_UNAUTHENTICATED_WRITE.to_string(),
                severity: Severity::High,
                category: Category::Auth,
                title: format!(
                    "Write endpoint \"{} {}\" has no authentication",
                    rule.method, rule.endpoint
                ),
                evidence: format!(
                    "Endpoint {} {} allows write operations with requiresAuth: false.",
                    rule.method, rule.endpoint
                ),
                recommendation: format!(
                    "Set requiresAuth: true for endpoint {} {} to prevent unauthorized data modification.",
                    rule.method, rule.endpoint
                ),
            });
        }

        // Lockout is still flagged: an endpoint nobody can reach almost
        // always means a forgotten role list, not an intentional removal.
        if rule.requires_auth && rule.roles_allowed.is_empty() {
            out.push(Finding {
                id: ids.mint(),
                check_id: ids::CHECK_AUTH_NO_ROLES_ALLOWED.to_string(),
                severity: Severity::High,
                category: Category::Auth,
                title: format!(
                    "Endpoint \"{} {}\" requires auth but allows no roles",
                    rule.method, rule.endpoint
                ),
                evidence: format!(
                    "Endpoint {} {} has requiresAuth: true with an empty rolesAllowed; no caller can access it.",
                    rule.method, rule.endpoint
                ),
                recommendation: format!(
                    "Add the intended roles to rolesAllowed (for example [\"user\", \"admin\"]) for endpoint {} {}.",
                    rule.method, rule.endpoint
                ),
            });
        }

        if method == "DELETE" && rule.roles_allowed.iter().any(|role| role == "user") {
            out.push(Finding {
                id: ids.mint(),
                check_id: ids::CHECK_AUTH_PERMISSIVE_DELETE.to_string(),
                severity: Severity::Medium,
                category: Category::Auth,
                title: format!("DELETE endpoint \"{}\" allows the user role", rule.endpoint),
                evidence: format!(
                    "Endpoint DELETE {} lists \"user\" in rolesAllowed, letting ordinary users delete resources.",
                    rule.endpoint
                ),
                recommendation: format!(
                    "Restrict DELETE operations on \"{}\" to the admin role.",
                    rule.endpoint
                ),
            });
        }
    }
}
