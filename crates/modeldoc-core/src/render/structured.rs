//! JSON and YAML rendering with convention-specific key casing
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use crate::error::DocResult;
use convert_case::{Case, Casing};
use serde::Serialize;
use serde_json::{Map, Value};

/// Key casing applied to serialized descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    /// `ModelName`, used for JSON
    Pascal,
    /// `modelName`, used for YAML
    Camel,
}

impl NamingConvention {
    fn case(self) -> Case {
        match self {
            NamingConvention::Pascal => Case::Pascal,
            NamingConvention::Camel => Case::Camel,
        }
    }

    /// Recase one key
    pub fn apply(self, key: &str) -> String {
        key.to_case(self.case())
    }
}

/// Serialize `document` into a JSON value whose object keys follow `naming`
pub fn to_value<D: Serialize + ?Sized>(document: &D, naming: NamingConvention) -> DocResult<Value> {
    let value = serde_json::to_value(document)?;
    Ok(recase_keys(value, naming))
}

fn recase_keys(value: Value, naming: NamingConvention) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (naming.apply(&key), recase_keys(value, naming)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| recase_keys(item, naming))
                .collect(),
        ),
        other => other,
    }
}

/// Indented JSON with PascalCase keys
pub fn to_json<D: Serialize + ?Sized>(document: &D) -> DocResult<String> {
    let value = to_value(document, NamingConvention::Pascal)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// YAML with camelCase keys
pub fn to_yaml<D: Serialize + ?Sized>(document: &D) -> DocResult<String> {
    let value = to_value(document, NamingConvention::Camel)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// JSON documents joined by a newline
pub fn to_json_batch<D: Serialize>(documents: &[D]) -> DocResult<String> {
    let rendered = documents
        .iter()
        .map(|document| to_json(document))
        .collect::<DocResult<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}

/// YAML documents joined by a `---` separator line
pub fn to_yaml_batch<D: Serialize>(documents: &[D]) -> DocResult<String> {
    let rendered = documents
        .iter()
        .map(|document| to_yaml(document))
        .collect::<DocResult<Vec<_>>>()?;
    Ok(rendered.join("---\n"))
}
