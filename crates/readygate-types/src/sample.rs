//! Canonical sample metadata with a deliberately bad shape.
//!
//! Triggers six HIGH and five MEDIUM findings: a raw deduction of 170,
//! capped at 80, for a readiness score of 20. The CLI `sample` subcommand
//! prints it, and the engine tests pin the exact finding set.

use crate::metadata::{AuthRule, BackendMetadata, Column, ForeignKey, FunctionMeta, Table};

pub fn sample_metadata() -> BackendMetadata {
    BackendMetadata {
        tables: Some(vec![
            Table {
                name: "users".to_string(),
                columns: vec![
                    column("id", "integer", ColumnShape::PrimaryKey),
                    // MEDIUM: sensitive column is nullable
                    column("email", "text", ColumnShape::Nullable),
                    // not flagged: "name" is not a sensitive column name
                    column("name", "text", ColumnShape::Nullable),
                ],
            },
            Table {
                // HIGH: no column carries primaryKey
                name: "posts".to_string(),
                columns: vec![
                    column("id", "integer", ColumnShape::Plain),
                    // MEDIUM: sensitive column is nullable
                    column("title", "text", ColumnShape::Nullable),
                    // HIGH: _id column without a foreignKey
                    column("user_id", "integer", ColumnShape::Plain),
                ],
            },
            Table {
                name: "comments".to_string(),
                columns: vec![
                    column("id", "integer", ColumnShape::PrimaryKey),
                    column("content", "text", ColumnShape::Plain),
                    // HIGH: foreignKey targets "post", which does not exist
                    Column {
                        name: "post_id".to_string(),
                        column_type: Some("integer".to_string()),
                        foreign_key: Some(ForeignKey {
                            table: "post".to_string(),
                            column: "id".to_string(),
                        }),
                        ..Column::default()
                    },
                ],
            },
        ]),
        auth_rules: Some(vec![
            // HIGH: unauthenticated POST
            auth_rule("/users", "POST", false, &[]),
            // HIGH: auth required but no roles listed
            auth_rule("/users", "GET", true, &[]),
            // MEDIUM: DELETE open to the user role
            auth_rule("/users", "DELETE", true, &["user"]),
            // HIGH: unauthenticated PATCH
            auth_rule("/posts", "PATCH", false, &[]),
            // MEDIUM: DELETE open to the user role, extra roles do not help
            auth_rule("/comments", "DELETE", true, &["user", "moderator"]),
        ]),
        functions: Some(vec![
            // MEDIUM: destructive, and no rule anywhere grants admin
            FunctionMeta {
                name: "cleanup_old_data".to_string(),
                is_destructive: Some(true),
                ..FunctionMeta::default()
            },
            FunctionMeta {
                name: "send_notifications".to_string(),
                is_destructive: Some(false),
                ..FunctionMeta::default()
            },
        ]),
    }
}

enum ColumnShape {
    Plain,
    Nullable,
    PrimaryKey,
}

fn column(name: &str, column_type: &str, shape: ColumnShape) -> Column {
    Column {
        name: name.to_string(),
        column_type: Some(column_type.to_string()),
        nullable: matches!(shape, ColumnShape::Nullable).then_some(true),
        primary_key: matches!(shape, ColumnShape::PrimaryKey).then_some(true),
        foreign_key: None,
    }
}

fn auth_rule(endpoint: &str, method: &str, requires_auth: bool, roles: &[&str]) -> AuthRule {
    AuthRule {
        endpoint: endpoint.to_string(),
        method: method.to_string(),
        requires_auth,
        roles_allowed: roles.iter().map(|r| r.to_string()).collect(),
    }
}
