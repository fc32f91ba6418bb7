//! Explain registry for checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after metadata examples.
    pub examples: ExamplePair,
}

/// Before and after metadata examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Metadata that would trigger a finding.
    pub before: &'static str,
    /// Metadata that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_SCHEMA_MISSING_PRIMARY_KEY => Some(explain_missing_primary_key()),
        ids::CHECK_SCHEMA_NULLABLE_SENSITIVE => Some(explain_nullable_sensitive()),
        ids::CHECK_SCHEMA_MISSING_FOREIGN_KEY => Some(explain_missing_foreign_key()),
        ids::CHECK_SCHEMA_BROKEN_FOREIGN_KEY => Some(explain_broken_foreign_key()),
        ids::CHECK_AUTH_UNAUTHENTICATED_WRITE => Some(explain_unauthenticated_write()),
        ids::CHECK_AUTH_NO_ROLES_ALLOWED => Some(explain_no_roles_allowed()),
        ids::CHECK_AUTH_PERMISSIVE_DELETE => Some(explain_permissive_delete()),
        ids::CHECK_DEPLOY_UNPROTECTED_DESTRUCTIVE => Some(explain_unprotected_destructive()),
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_SCHEMA_MISSING_PRIMARY_KEY,
        ids::CHECK_SCHEMA_NULLABLE_SENSITIVE,
        ids::CHECK_SCHEMA_MISSING_FOREIGN_KEY,
        ids::CHECK_SCHEMA_BROKEN_FOREIGN_KEY,
        ids::CHECK_AUTH_UNAUTHENTICATED_WRITE,
        ids::CHECK_AUTH_NO_ROLES_ALLOWED,
        ids::CHECK_AUTH_PERMISSIVE_DELETE,
        ids::CHECK_DEPLOY_UNPROTECTED_DESTRUCTIVE,
    ]
}

fn explain_missing_primary_key() -> Explanation {
    Explanation {
        title: "Table Without Primary Key",
        description: "\
Detects tables where no column is flagged `primaryKey: true`.

Tables without a primary key are problematic because:
- Rows cannot be addressed individually for updates or deletes
- Replication and sync tooling usually requires a primary key
- Accidental duplicate rows cannot be distinguished",
        remediation: "\
Add a primary key column, typically an integer or UUID `id` column with
`primaryKey: true`. One finding is emitted per table, regardless of how many
columns it has.",
        examples: ExamplePair {
            before: r#"{"name": "posts", "columns": [
  {"name": "title", "type": "text"}
]}"#,
            after: r#"{"name": "posts", "columns": [
  {"name": "id", "type": "integer", "primaryKey": true},
  {"name": "title", "type": "text"}
]}"#,
        },
    }
}

fn explain_nullable_sensitive() -> Explanation {
    Explanation {
        title: "Nullable Sensitive Column",
        description: "\
Detects columns literally named `email` or `title` that are declared
`nullable: true`.

These two names are matched exactly and case-sensitively; no other names are
inspected. Rows with a missing email or title tend to surface as broken
account flows and empty list entries much later than the insert that caused
them.",
        remediation: "\
Set `nullable: false` on the column and backfill existing rows, or rename the
column if null really is a valid state for it.",
        examples: ExamplePair {
            before: r#"{"name": "email", "type": "text", "nullable": true}"#,
            after: r#"{"name": "email", "type": "text", "nullable": false}"#,
        },
    }
}

fn explain_missing_foreign_key() -> Explanation {
    Explanation {
        title: "Foreign-Key-Shaped Column Without Relationship",
        description: "\
Detects columns whose name ends with `_id` but which declare no `foreignKey`
relationship.

An `_id` suffix signals a reference to another table. Without a declared
relationship the database cannot enforce referential integrity, and orphaned
rows accumulate silently.",
        remediation: "\
Add a `foreignKey` object pointing at the referenced table and column:

    {\"name\": \"user_id\", \"foreignKey\": {\"table\": \"users\", \"column\": \"id\"}}

If the column is not actually a reference, rename it so it does not end in
`_id`.",
        examples: ExamplePair {
            before: r#"{"name": "user_id", "type": "integer"}"#,
            after: r#"{"name": "user_id", "type": "integer",
 "foreignKey": {"table": "users", "column": "id"}}"#,
        },
    }
}

fn explain_broken_foreign_key() -> Explanation {
    Explanation {
        title: "Foreign Key Targets Missing Table",
        description: "\
Detects `foreignKey` declarations whose `table` is not among the tables in
the metadata.

A reference to a table that does not exist either means the target was
renamed or dropped, or the declaration has a typo. Either way the
relationship can never be enforced.

Known gap: existence of the target *column* inside an existing target table
is not verified.",
        remediation: "\
Create the missing table, or fix the `foreignKey.table` value to name an
existing table.",
        examples: ExamplePair {
            before: r#"{"name": "post_id", "foreignKey": {"table": "post", "column": "id"}}"#,
            after: r#"{"name": "post_id", "foreignKey": {"table": "posts", "column": "id"}}"#,
        },
    }
}

fn explain_unauthenticated_write() -> Explanation {
    Explanation {
        title: "Unauthenticated Write Endpoint",
        description: "\
Detects auth rules for write methods (POST, PUT, PATCH, DELETE, matched
case-insensitively) with `requiresAuth: false`.

Anyone on the network can modify data through such an endpoint. Read
endpoints are deliberately out of scope for this check.",
        remediation: "\
Set `requiresAuth: true` on the rule and list the roles that may perform the
write in `rolesAllowed`.",
        examples: ExamplePair {
            before: r#"{"endpoint": "/users", "method": "POST", "requiresAuth": false}"#,
            after: r#"{"endpoint": "/users", "method": "POST", "requiresAuth": true,
 "rolesAllowed": ["user"]}"#,
        },
    }
}

fn explain_no_roles_allowed() -> Explanation {
    Explanation {
        title: "Auth Required But No Roles Allowed",
        description: "\
Detects auth rules with `requiresAuth: true` and an empty or absent
`rolesAllowed`.

No caller can satisfy such a rule, so the endpoint is unreachable by
everyone. Lockout is flagged rather than treated as safe: it almost always
means a role list was forgotten, not that the endpoint was meant to be dead.",
        remediation: "\
Add the intended roles to `rolesAllowed` (for example `[\"user\"]` or
`[\"admin\"]`), or drop the rule if the endpoint should be removed.",
        examples: ExamplePair {
            before: r#"{"endpoint": "/users", "method": "GET", "requiresAuth": true,
 "rolesAllowed": []}"#,
            after: r#"{"endpoint": "/users", "method": "GET", "requiresAuth": true,
 "rolesAllowed": ["user", "admin"]}"#,
        },
    }
}

fn explain_permissive_delete() -> Explanation {
    Explanation {
        title: "Overly Permissive Delete",
        description: "\
Detects DELETE rules (matched case-insensitively) whose `rolesAllowed`
contains the `user` role.

Letting ordinary users delete resources is frequently broader than intended.
The check fires even when other roles are listed alongside `user`, and
independently of the no-roles check.",
        remediation: "\
Restrict DELETE operations to `admin` (or another elevated role), and expose
user-facing removal as a soft-delete write instead.",
        examples: ExamplePair {
            before: r#"{"endpoint": "/posts", "method": "DELETE", "requiresAuth": true,
 "rolesAllowed": ["user"]}"#,
            after: r#"{"endpoint": "/posts", "method": "DELETE", "requiresAuth": true,
 "rolesAllowed": ["admin"]}"#,
        },
    }
}

fn explain_unprotected_destructive() -> Explanation {
    Explanation {
        title: "Unprotected Destructive Function",
        description: "\
Detects functions flagged `isDestructive: true` when no auth rule anywhere in
the project lists `admin` in `rolesAllowed`.

The gate is global, not per-function: a single admin-gated rule for any
endpoint suppresses every finding from this check. That is documented
behavior, inherited from how deployments wire function invocation through
their API layer.",
        remediation: "\
Add at least one auth rule that requires the `admin` role, or clear the
`isDestructive` flag if the function cannot actually lose data.",
        examples: ExamplePair {
            before: r#"{"functions": [{"name": "cleanup_old_data", "isDestructive": true}],
 "authRules": []}"#,
            after: r#"{"functions": [{"name": "cleanup_old_data", "isDestructive": true}],
 "authRules": [{"endpoint": "/admin", "method": "POST",
                "requiresAuth": true, "rolesAllowed": ["admin"]}]}"#,
        },
    }
}
