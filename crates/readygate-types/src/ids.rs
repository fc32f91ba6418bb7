//! Stable identifiers for checks.
//!
//! `check_id` is a dotted namespace: category prefix, then a short
//! snake_case discriminator. These strings appear in persisted reports, so
//! they are append-only.

// Schema checks
pub const CHECK_SCHEMA_MISSING_PRIMARY_KEY: &str = "schema.missing_primary_key";
pub const CHECK_SCHEMA_NULLABLE_SENSITIVE: &str = "schema.nullable_sensitive_column";
pub const CHECK_SCHEMA_MISSING_FOREIGN_KEY: &str = "schema.missing_foreign_key";
pub const CHECK_SCHEMA_BROKEN_FOREIGN_KEY: &str = "schema.broken_foreign_key";

// Auth checks
pub const CHECK_AUTH_UNAUTHENTICATED_WRITE: &str = "auth.unauthenticated_write";
pub const CHECK_AUTH_NO_ROLES_ALLOWED: &str = "auth.no_roles_allowed";
pub const CHECK_AUTH_PERMISSIVE_DELETE: &str = "auth.permissive_delete";

// Deploy checks
pub const CHECK_DEPLOY_UNPROTECTED_DESTRUCTIVE: &str = "deploy.unprotected_destructive_function";
