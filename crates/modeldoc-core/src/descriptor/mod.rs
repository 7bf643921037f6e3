//! Renderer-agnostic descriptors of models and controllers
//!
//! Descriptors are rebuilt from live [`TypeInfo`](crate::reflect::TypeInfo)
//! on every export call and discarded after rendering.
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

pub mod controller;
pub mod model;
pub mod property;

pub use property::PropertyResolver;

use serde::Serialize;

/// Placeholder for absent metadata and unavailable default values
pub const MISSING: &str = "-";

/// Placeholder for a default value that renders to nothing
pub const NULL_VALUE: &str = "null";

/// Placeholder verb for methods without HTTP verb metadata
pub const UNKNOWN_VERB: &str = "UNKNOWN";

/// One documented property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Display name, never empty
    pub name: String,
    /// Short type name, never empty
    #[serde(rename = "type")]
    pub type_label: String,
    /// Resolved description or `-`
    pub description: String,
    /// Comma-joined attribute rendering or `-`
    #[serde(rename = "attributes")]
    pub attributes_summary: String,
    /// Rendered sample value, `-` or `null`
    pub default_value: String,
}

/// One documented model, properties in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub model_name: String,
    pub properties: Vec<PropertyDescriptor>,
}

/// One documented route parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    /// `true` unless the parameter declares a default value
    pub required: bool,
}

/// One documented route handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub method_name: String,
    /// Uppercased verb attribute kind (`HTTPGET`) or `UNKNOWN`
    pub http_verb: String,
    pub route: String,
    pub description: String,
    pub parameters: Vec<ParameterDescriptor>,
}

/// One documented controller-like type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerDescriptor {
    pub controller_name: String,
    /// Route template from type-level metadata, empty when absent
    pub route_prefix: String,
    pub methods: Vec<MethodDescriptor>,
}

/// `value` unless it is blank, in which case `-`
pub(crate) fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}
