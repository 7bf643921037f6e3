//! Controller descriptor building: verbs, routes and parameters
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::property::describe;
use super::{
    or_missing, ControllerDescriptor, MethodDescriptor, ParameterDescriptor, UNKNOWN_VERB,
};
use crate::reflect::attribute::{self, kinds, Attribute};
use crate::reflect::{MethodInfo, TypeInfo};
use crate::xmldoc::XmlDocumentation;
use tracing::trace;

const CONTROLLER_SUFFIX: &str = "Controller";

impl ControllerDescriptor {
    /// Describe every public instance method declared directly on `type_info`
    pub fn build(type_info: &TypeInfo, docs: &XmlDocumentation) -> Self {
        let route_prefix = route_prefix(type_info);

        let methods = type_info
            .declared_public_methods()
            .map(|method| MethodDescriptor::build(type_info, method, &route_prefix, docs))
            .collect::<Vec<_>>();

        trace!(
            controller = %type_info.name,
            route_prefix = %route_prefix,
            methods = methods.len(),
            "Built controller descriptor"
        );

        Self {
            controller_name: type_info.name.clone(),
            route_prefix,
            methods,
        }
    }

    /// One descriptor per type, in the given order
    pub fn build_all(types: &[TypeInfo], docs: &XmlDocumentation) -> Vec<Self> {
        types.iter().map(|info| Self::build(info, docs)).collect()
    }
}

impl MethodDescriptor {
    /// Describe one method of a controller
    pub fn build(
        controller: &TypeInfo,
        method: &MethodInfo,
        route_prefix: &str,
        docs: &XmlDocumentation,
    ) -> Self {
        let xml = docs.method_summary(&controller.full_name, &method.name);

        Self {
            method_name: method.name.clone(),
            http_verb: http_verb(method),
            route: route(&controller.name, route_prefix, method),
            description: describe(&method.attributes, xml),
            parameters: method
                .parameters
                .iter()
                .map(|param| ParameterDescriptor {
                    name: or_missing(&param.name),
                    type_label: or_missing(&param.type_label),
                    required: !param.has_default,
                })
                .collect(),
        }
    }
}

/// Template of the type-level Route attribute, empty when absent
pub fn route_prefix(type_info: &TypeInfo) -> String {
    attribute::find_value(&type_info.attributes, kinds::ROUTE, "template")
        .map(|template| template.trim().to_string())
        .unwrap_or_default()
}

/// First attribute whose kind starts with `Http`
pub fn http_attribute(method: &MethodInfo) -> Option<&Attribute> {
    method
        .attributes
        .iter()
        .find(|attr| attr.kind.starts_with(kinds::HTTP_PREFIX))
}

/// `HttpGetAttribute` → `HTTPGET`; `UNKNOWN` without verb metadata
pub fn http_verb(method: &MethodInfo) -> String {
    http_attribute(method)
        .map(|attr| attr.short_kind().to_uppercase())
        .unwrap_or_else(|| UNKNOWN_VERB.to_string())
}

/// `/<prefix>/<segment>`, or `/<ControllerBase>/<segment>` without a prefix.
///
/// The segment is the method name when verb metadata is present, else empty.
pub fn route(controller_name: &str, route_prefix: &str, method: &MethodInfo) -> String {
    let segment = match http_attribute(method) {
        Some(_) => method.name.as_str(),
        None => "",
    };

    let path = if route_prefix.is_empty() {
        let base = controller_name
            .strip_suffix(CONTROLLER_SUFFIX)
            .unwrap_or(controller_name);
        format!("/{}/{}", base, segment)
    } else {
        format!("/{}/{}", route_prefix, segment)
    };

    collapse_slashes(&path)
}

fn collapse_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && result.ends_with('/') {
            continue;
        }
        result.push(ch);
    }
    result
}
