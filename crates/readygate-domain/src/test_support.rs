use readygate_types::{AuthRule, BackendMetadata, Column, ForeignKey, FunctionMeta, Table};

pub fn metadata(
    tables: Vec<Table>,
    auth_rules: Vec<AuthRule>,
    functions: Vec<FunctionMeta>,
) -> BackendMetadata {
    BackendMetadata {
        tables: Some(tables),
        auth_rules: Some(auth_rules),
        functions: Some(functions),
    }
}

pub fn table(name: &str, columns: Vec<Column>) -> Table {
    Table {
        name: name.to_string(),
        columns,
    }
}

pub fn column(name: &str) -> Column {
    Column {
        name: name.to_string(),
        ..Column::default()
    }
}

pub fn pk_column(name: &str) -> Column {
    Column {
        name: name.to_string(),
        primary_key: Some(true),
        ..Column::default()
    }
}

pub fn nullable_column(name: &str) -> Column {
    Column {
        name: name.to_string(),
        nullable: Some(true),
        ..Column::default()
    }
}

pub fn fk_column(name: &str, target_table: &str, target_column: &str) -> Column {
    Column {
        name: name.to_string(),
        foreign_key: Some(ForeignKey {
            table: target_table.to_string(),
            column: target_column.to_string(),
        }),
        ..Column::default()
    }
}

pub fn auth_rule(endpoint: &str, method: &str, requires_auth: bool, roles: &[&str]) -> AuthRule {
    AuthRule {
        endpoint: endpoint.to_string(),
        method: method.to_string(),
        requires_auth,
        roles_allowed: roles.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn function(name: &str, destructive: Option<bool>) -> FunctionMeta {
    FunctionMeta {
        name: name.to_string(),
        is_destructive: destructive,
        ..FunctionMeta::default()
    }
}
