use crate::engine::FindingIds;
use readygate_types::{ids, Category, Finding, Severity, Table};
use std::collections::BTreeSet;

/// Column names whose nullability is flagged. Matched exactly and
/// case-sensitively; this list is fixed, not configurable.
const SENSITIVE_COLUMNS: [&str; 2] = ["email", "title"];

/// Suffix that marks a column as foreign-key-shaped.
const FK_SUFFIX: &str = "_id";

pub(crate) fn run(tables: &[Table], ids: &mut FindingIds, out: &mut Vec<Finding>) {
    // Built once per run, before any broken-reference lookup.
    let table_names: BTreeSet<&str> = tables.iter().map(|t| t.name.as_str()).collect();

    for table in tables {
        let has_primary_key = table.columns.iter().any(|c| c.primary_key == Some(true));
        if !has_primary_key {
            out.push(Finding {
                id: ids.mint(),
                check_id: ids::CHECK_SCHEMA_MISSING_PRIMARY_KEY.to_string(),
                severity: Severity::High,
                category: Category::Schema,
                title: format!("Table \"{}\" has no primary key", table.name),
                evidence: format!(
                    "Table {} has {} columns but none is flagged primaryKey.",
                    table.name,
                    table.columns.len()
                ),
                recommendation: format!(
                    "Add a primary key column (for example an integer \"id\" with primaryKey: true) to table \"{}\".",
                    table.name
                ),
            });
        }

        for column in &table.columns {
            if SENSITIVE_COLUMNS.contains(&column.name.as_str()) && column.nullable == Some(true) {
                out.push(Finding {
                    id: ids.mint(),
                    check_id: ids::CHECK_SCHEMA_NULLABLE_SENSITIVE.to_string(),
                    severity: Severity::Medium,
                    category: Category::Schema,
                    title: format!(
                        "Column \"{}\" in table \"{}\" is nullable",
                        column.name, table.name
                    ),
                    evidence: format!(
                        "Column \"{}\" in table \"{}\" has nullable: true, which risks rows with a missing {}.",
                        column.name, table.name, column.name
                    ),
                    recommendation: format!(
                        "Set nullable: false for column \"{}\" in table \"{}\" and backfill existing rows.",
                        column.name, table.name
                    ),
                });
            }

            if column.name.ends_with(FK_SUFFIX) && column.foreign_key.is_none() {
                out.push(Finding {
                    id: ids.mint(),
                    check_id: ids::CHECK_SCHEMA_MISSING_FOREIGN_KEY.to_string(),
                    severity: Severity::High,
                    category: Category::Schema,
                    title: format!(
                        "Column \"{}\" in table \"{}\" lacks a foreign key",
                        column.name, table.name
                    ),
                    evidence: format!(
                        "Column \"{}\" in table \"{}\" ends with \"_id\" but declares no foreignKey relationship.",
                        column.name, table.name
                    ),
                    recommendation: format!(
                        "Add a foreignKey on column \"{}\" pointing at the referenced table and column.",
                        column.name
                    ),
                });
            }

            if let Some(foreign_key) = &column.foreign_key {
                // Target-column existence inside an existing table is not
                // verified; known gap.
                if !table_names.contains(foreign_key.table.as_str()) {
                    out.push(Finding {
                        id: ids.mint(),
                        check_id: ids::CHECK_SCHEMA_BROKEN_FOREIGN_KEY.to_string(),
                        severity: Severity::High,
                        category: Category::Schema,
                        title: format!(
                            "Foreign key on \"{}.{}\" points at a non-existent table",
                            table.name, column.name
                        ),
                        evidence: format!(
                            "Column \"{}\" references table \"{}\", which is not in the schema.",
                            column.name, foreign_key.table
                        ),
                        recommendation: format!(
                            "Create the missing table \"{}\" or fix the foreignKey reference on \"{}.{}\".",
                            foreign_key.table, table.name, column.name
                        ),
                    });
                }
            }
        }
    }
}
