//! Property resolution: display name, description, attributes and sample value
//!
//! Resolution never fails. Absent metadata and construction or access
//! failures degrade to the `-` / `null` placeholders.
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use super::{or_missing, PropertyDescriptor, MISSING, NULL_VALUE};
use crate::reflect::attribute::{self, kinds, Attribute};
use crate::reflect::{Instance, PropertyInfo, PropertyValue, TypeInfo};
use crate::xmldoc::XmlDocumentation;
use tracing::debug;

/// Resolves [`PropertyDescriptor`]s for the properties of one type.
///
/// A sample instance is constructed once when the resolver is created and
/// shared by every property lookup of the same export call.
pub struct PropertyResolver<'a> {
    type_info: &'a TypeInfo,
    docs: &'a XmlDocumentation,
    sample: Option<Instance>,
}

impl<'a> PropertyResolver<'a> {
    /// Create a resolver, constructing the sample instance if possible
    pub fn new(type_info: &'a TypeInfo, docs: &'a XmlDocumentation) -> Self {
        let sample = match type_info.instantiate() {
            Some(Ok(instance)) => Some(instance),
            Some(Err(e)) => {
                debug!(type_name = %type_info.name, error = %e, "Sample construction failed");
                None
            }
            None => {
                debug!(type_name = %type_info.name, "No parameterless constructor");
                None
            }
        };

        Self {
            type_info,
            docs,
            sample,
        }
    }

    /// Resolve every field of one property
    pub fn resolve(&self, property: &PropertyInfo) -> PropertyDescriptor {
        PropertyDescriptor {
            name: display_name(property),
            type_label: or_missing(&property.type_label),
            description: self.description(property),
            attributes_summary: attributes_summary(&property.attributes),
            default_value: self.default_value(property),
        }
    }

    /// Documentation → Description → XML summary → `-`
    pub fn description(&self, property: &PropertyInfo) -> String {
        let xml = self
            .docs
            .property_summary(&self.type_info.full_name, &property.name);
        describe(&property.attributes, xml)
    }

    /// Rendered value on the sample instance, or `-`
    pub fn default_value(&self, property: &PropertyInfo) -> String {
        let Some(instance) = self.sample.as_ref() else {
            return MISSING.to_string();
        };
        let Some(getter) = property.getter.as_ref() else {
            return MISSING.to_string();
        };

        match getter.read(&**instance) {
            Ok(value) => render_value(&value),
            Err(e) => {
                debug!(
                    type_name = %self.type_info.name,
                    property = %property.name,
                    error = %e,
                    "Property read failed"
                );
                MISSING.to_string()
            }
        }
    }
}

/// DisplayName attribute value, else the declared identifier
pub fn display_name(property: &PropertyInfo) -> String {
    match attribute::find_value(&property.attributes, kinds::DISPLAY_NAME, "displayName") {
        Some(name) => name.to_string(),
        None => or_missing(&property.name),
    }
}

/// Description precedence shared by properties and methods:
/// Documentation summary, then Description, then the external summary.
pub fn describe(attributes: &[Attribute], external: Option<&str>) -> String {
    attribute::find_value(attributes, kinds::DOCUMENTATION, "summary")
        .or_else(|| attribute::find_value(attributes, kinds::DESCRIPTION, "description"))
        .or(external)
        .map(or_missing)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Every attached attribute rendered and joined with `", "`, or `-`
pub fn attributes_summary(attributes: &[Attribute]) -> String {
    if attributes.is_empty() {
        return MISSING.to_string();
    }

    attributes
        .iter()
        .map(Attribute::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text form of a sample value
pub fn render_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Null => NULL_VALUE.to_string(),
        PropertyValue::Text(text) => format!("\"{}\"", text),
        PropertyValue::Bool(flag) => flag.to_string(),
        PropertyValue::Other(text) if text.trim().is_empty() => NULL_VALUE.to_string(),
        PropertyValue::Other(text) => text.clone(),
    }
}
