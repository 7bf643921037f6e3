//! Manifest-described models and controllers
//!
//! A manifest documents types that live outside the current Rust program.
//! Each entry is converted into a [`TypeInfo`] so it flows through the same
//! resolvers and renderers as a [`Reflect`](crate::reflect::Reflect) type.
//!
//! ```yaml
//! models:
//!   - name: Person
//!     full_name: Shop.Models.Person
//!     properties:
//!       - name: Name
//!         type: String
//!         default: Bob
//!       - name: IsActive
//!         type: bool
//!         attributes: [Required]
//! controllers:
//!   - name: UsersController
//!     route: api/users
//!     methods:
//!       - name: Get
//!         http: get
//!         parameters:
//!           - { name: id, type: i32 }
//! ```
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{DocError, DocResult, ReflectError};
use crate::reflect::{
    Attribute, Constructor, Getter, MethodInfo, ParameterInfo, PropertyInfo, PropertyValue,
    TypeInfo,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Models and controllers described by one manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub models: Vec<ModelEntry>,
    pub controllers: Vec<ControllerEntry>,
}

/// An attribute written either as a bare kind or with arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeEntry {
    Bare(String),
    Full(Attribute),
}

impl From<&AttributeEntry> for Attribute {
    fn from(entry: &AttributeEntry) -> Self {
        match entry {
            AttributeEntry::Bare(kind) => Attribute::new(kind.clone()),
            AttributeEntry::Full(attribute) => attribute.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    /// `false` models a type without a parameterless constructor
    #[serde(default = "default_true")]
    pub constructible: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    /// Sample value; absent means unknown, an explicit `null` means null
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Value>,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerEntry {
    pub name: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    /// Route template, shorthand for a `Route` attribute
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    /// HTTP verb, shorthand for an `Http<Verb>` attribute
    #[serde(default)]
    pub http: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub inherited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_label: String,
    #[serde(default)]
    pub optional: bool,
}

fn default_true() -> bool {
    true
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Sample instance of a manifest model: the declared default of each property
#[derive(Debug, Clone, Default)]
struct ManifestInstance {
    values: HashMap<String, PropertyValue>,
}

impl ManifestInstance {
    fn value(&self, property: &str) -> Result<PropertyValue, ReflectError> {
        self.values
            .get(property)
            .cloned()
            .ok_or_else(|| ReflectError::property_access(property, "no default declared"))
    }
}

impl Manifest {
    /// Load a manifest, choosing the parser by file extension.
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
        .map_err(|reason| DocError::manifest(path, reason))?;

        debug!(
            path = %path.display(),
            models = manifest.models.len(),
            controllers = manifest.controllers.len(),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse YAML manifest text
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse JSON manifest text
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Type descriptions of every model, in manifest order
    pub fn model_types(&self) -> Vec<TypeInfo> {
        self.models.iter().map(ModelEntry::type_info).collect()
    }

    /// Type descriptions of every controller, in manifest order
    pub fn controller_types(&self) -> Vec<TypeInfo> {
        self.controllers.iter().map(ControllerEntry::type_info).collect()
    }
}

impl ModelEntry {
    /// Convert into a type description with a constructor and getters
    pub fn type_info(&self) -> TypeInfo {
        let mut builder = TypeInfo::named(&self.name)
            .full_name(self.full_name.as_deref().unwrap_or(&self.name));

        for attribute in &self.attributes {
            builder = builder.attribute(attribute.into());
        }

        let mut sample = ManifestInstance::default();
        for property in &self.properties {
            if let Some(value) = &property.default {
                sample
                    .values
                    .insert(property.name.clone(), property_value(value));
            }
            builder = builder.property(property.property_info());
        }

        if self.constructible {
            builder = builder.constructor(Constructor::fallible(move || Ok(sample.clone())));
        }

        builder.build()
    }
}

impl PropertyEntry {
    fn property_info(&self) -> PropertyInfo {
        let mut info = PropertyInfo::new(&self.name, &self.type_label);
        for attribute in &self.attributes {
            info = info.attribute(attribute.into());
        }
        if self.default.is_some() {
            let name = self.name.clone();
            info = info.getter(Getter::try_of(move |instance: &ManifestInstance| {
                instance.value(&name)
            }));
        }
        if !self.public {
            info = info.private();
        }
        if self.is_static {
            info = info.shared();
        }
        info
    }
}

impl ControllerEntry {
    /// Convert into a type description; the route shorthand becomes a `Route` attribute
    pub fn type_info(&self) -> TypeInfo {
        let mut builder = TypeInfo::named(&self.name)
            .full_name(self.full_name.as_deref().unwrap_or(&self.name));

        if let Some(route) = &self.route {
            builder = builder.attribute(Attribute::route(route));
        }
        for attribute in &self.attributes {
            builder = builder.attribute(attribute.into());
        }
        for method in &self.methods {
            builder = builder.method(method.method_info());
        }

        builder.build()
    }
}

impl MethodEntry {
    fn method_info(&self) -> MethodInfo {
        let mut info = MethodInfo::new(&self.name);

        if let Some(verb) = &self.http {
            info = info.attribute(Attribute::http(verb));
        }
        for attribute in &self.attributes {
            info = info.attribute(attribute.into());
        }
        for param in &self.parameters {
            let mut parameter = ParameterInfo::new(&param.name, &param.type_label);
            if param.optional {
                parameter = parameter.optional();
            }
            info = info.parameter(parameter);
        }

        if !self.public {
            info = info.private();
        }
        if self.is_static {
            info = info.shared();
        }
        if self.inherited {
            info = info.inherited();
        }
        info
    }
}

/// Map a manifest scalar onto a sample value
fn property_value(value: &Value) -> PropertyValue {
    match value {
        Value::Null => PropertyValue::Null,
        Value::Bool(flag) => PropertyValue::Bool(*flag),
        Value::String(text) => PropertyValue::Text(text.clone()),
        Value::Number(number) => PropertyValue::Other(number.to_string()),
        other => PropertyValue::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ControllerDescriptor, ModelDescriptor};
    use crate::xmldoc::XmlDocumentation;
    use std::io::Write;
    use tempfile::Builder;

    const MANIFEST: &str = r#"
models:
  - name: Person
    full_name: Shop.Person
    properties:
      - name: Name
        type: String
        default: Bob
      - name: IsActive
        type: bool
        default: true
      - name: Nickname
        type: String
        default: null
      - name: Age
        type: i32
        default: 42
      - name: Secret
        type: String
        public: false
      - name: Email
        type: String
        attributes:
          - Required
          - kind: DisplayNameAttribute
            args:
              - { name: displayName, value: E-mail }
  - name: Token
    constructible: false
    properties:
      - name: Value
        type: String
        default: abc
controllers:
  - name: UsersController
    route: api/users
    methods:
      - name: Get
        http: get
        parameters:
          - { name: id, type: i32 }
          - { name: verbose, type: bool, optional: true }
      - name: ToString
        inherited: true
"#;

    #[test]
    fn test_model_entries_resolve_defaults() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let types = manifest.model_types();
        let person = ModelDescriptor::build(&types[0], &XmlDocumentation::empty());

        let rows: Vec<_> = person
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.default_value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Name", "\"Bob\""),
                ("IsActive", "true"),
                ("Nickname", "null"),
                ("Age", "42"),
                ("E-mail", "-"),
            ]
        );
        assert_eq!(person.properties[4].attributes_summary, "Required, DisplayName(E-mail)");
    }

    #[test]
    fn test_non_constructible_model() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let token = ModelDescriptor::build(&manifest.model_types()[1], &XmlDocumentation::empty());
        assert_eq!(token.properties[0].default_value, "-");
    }

    #[test]
    fn test_controller_entries() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let docs = XmlDocumentation::empty();
        let users = ControllerDescriptor::build(&manifest.controller_types()[0], &docs);

        assert_eq!(users.route_prefix, "api/users");
        assert_eq!(users.methods.len(), 1);
        assert_eq!(users.methods[0].http_verb, "HTTPGET");
        assert_eq!(users.methods[0].route, "/api/users/Get");
        assert!(!users.methods[0].parameters[1].required);
    }

    #[test]
    fn test_load_json_by_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"models": [{{"name": "Empty", "properties": []}}]}}"#
        )
        .unwrap();

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.models.len(), 1);
        assert!(manifest.controllers.is_empty());
    }

    #[test]
    fn test_invalid_manifest_reports_path() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "models: 12").unwrap();

        let err = Manifest::load(file.path()).unwrap_err();
        assert!(matches!(err, DocError::Manifest { ref path, .. } if path == file.path()));
    }
}
