//! Backend metadata as supplied by an InsForge deployment or pasted JSON.
//!
//! The three top-level categories are deliberately lenient: a missing,
//! `null`, or non-array value disables the corresponding check category
//! instead of failing the parse. Everything inside a present array is typed
//! strictly, so the engine never observes a column without a name or an auth
//! rule without a method.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendMetadata {
    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub tables: Option<Vec<Table>>,

    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_rules: Option<Vec<AuthRule>>,

    #[serde(
        default,
        deserialize_with = "lenient_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub functions: Option<Vec<FunctionMeta>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthRule {
    pub endpoint: String,
    pub method: String,
    pub requires_auth: bool,

    /// Absent and `null` both mean "no roles"; checks test for emptiness,
    /// never for presence.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roles_allowed: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMeta {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub touches_tables: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_destructive: Option<bool>,
}

/// Accepts only a JSON array for a check category; anything else (missing,
/// `null`, an object, a number) yields `None` and silently disables the
/// category.
fn lenient_category<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    let Some(JsonValue::Array(items)) = value else {
        return Ok(None);
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(serde_json::from_value(item).map_err(serde::de::Error::custom)?);
    }
    Ok(Some(out))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
