use crate::engine::FindingIds;
use readygate_types::{BackendMetadata, Finding};

mod auth;
mod deploy;
mod schema;


/// Run all check categories in their fixed order: schema, auth, deploy.
///
/// An absent category contributes nothing; the deploy check still consults
/// the auth rules (treating absent as empty) for its global admin gate.
pub(crate) fn run_all(metadata: &BackendMetadata, ids: &mut FindingIds, out: &mut Vec<Finding>) {
    if let Some(tables) = metadata.tables.as_deref() {
        schema::run(tables, ids, out);
    }
    if let Some(rules) = metadata.auth_rules.as_deref() {
        auth::run(rules, ids, out);
    }
    if let Some(functions) = metadata.functions.as_deref() {
        deploy::run(
            functions,
            metadata.auth_rules.as_deref().unwrap_or_default(),
            ids,
            out,
        );
    }
}
