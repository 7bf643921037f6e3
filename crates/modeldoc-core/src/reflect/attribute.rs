//! Attribute metadata attached to types, properties and methods
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Conventional suffix on attribute kind names, stripped for display
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Well-known attribute kinds understood by the resolvers
pub mod kinds {
    /// Overrides the documented property name (`displayName`)
    pub const DISPLAY_NAME: &str = "DisplayNameAttribute";
    /// Dedicated documentation summary (`summary`)
    pub const DOCUMENTATION: &str = "DocumentationAttribute";
    /// Generic description (`description`)
    pub const DESCRIPTION: &str = "DescriptionAttribute";
    /// Type-level route prefix (`template`)
    pub const ROUTE: &str = "RouteAttribute";
    /// Prefix shared by every HTTP verb attribute (`HttpGetAttribute`, ...)
    pub const HTTP_PREFIX: &str = "Http";
}

/// One named constructor argument of an attribute.
///
/// `value` is `None` when the argument exists on the attribute kind but its
/// value could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeArg {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A metadata entry attached to a type, property or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Kind name, e.g. `DisplayNameAttribute` or `Required`
    pub kind: String,
    /// Constructor arguments in declaration order
    #[serde(default)]
    pub args: Vec<AttributeArg>,
}

impl Attribute {
    /// Create an attribute without arguments
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: Vec::new(),
        }
    }

    /// Add a resolved constructor argument
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(AttributeArg {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Add a constructor argument whose value is not known
    pub fn unresolved_arg(mut self, name: impl Into<String>) -> Self {
        self.args.push(AttributeArg {
            name: name.into(),
            value: None,
        });
        self
    }

    /// `DisplayName(displayName)`
    pub fn display_name(name: impl Into<String>) -> Self {
        Self::new(kinds::DISPLAY_NAME).arg("displayName", name)
    }

    /// `Documentation(summary)`
    pub fn documentation(summary: impl Into<String>) -> Self {
        Self::new(kinds::DOCUMENTATION).arg("summary", summary)
    }

    /// `Description(description)`
    pub fn description(description: impl Into<String>) -> Self {
        Self::new(kinds::DESCRIPTION).arg("description", description)
    }

    /// `Route(template)`
    pub fn route(template: impl Into<String>) -> Self {
        Self::new(kinds::ROUTE).arg("template", template)
    }

    /// HTTP verb marker, `Attribute::http("get")` yields `HttpGetAttribute`
    pub fn http(verb: &str) -> Self {
        let mut chars = verb.chars();
        let verb = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        };
        Self::new(format!("{}{}{}", kinds::HTTP_PREFIX, verb, ATTRIBUTE_SUFFIX))
    }

    /// Kind name without the trailing `Attribute` suffix
    pub fn short_kind(&self) -> &str {
        short_kind(&self.kind)
    }

    /// Whether this attribute is of `kind`, with or without the suffix
    pub fn is(&self, kind: &str) -> bool {
        self.short_kind() == short_kind(kind)
    }

    /// Resolved value of the named argument, if any
    pub fn value(&self, arg_name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|arg| arg.name.eq_ignore_ascii_case(arg_name))
            .and_then(|arg| arg.value.as_deref())
    }

    /// Resolved value of the first argument, if any
    pub fn first_value(&self) -> Option<&str> {
        self.args.first().and_then(|arg| arg.value.as_deref())
    }

    /// Render as `Kind(v1, v2)`, or bare `Kind` when no argument resolves
    pub fn render(&self) -> String {
        let values: Vec<&str> = self
            .args
            .iter()
            .filter_map(|arg| arg.value.as_deref())
            .collect();

        if values.is_empty() {
            self.short_kind().to_string()
        } else {
            format!("{}({})", self.short_kind(), values.join(", "))
        }
    }
}

/// Strip a trailing `Attribute` from a kind name
pub fn short_kind(kind: &str) -> &str {
    match kind.strip_suffix(ATTRIBUTE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => kind,
    }
}

/// First attribute of the given kind
pub fn find<'a>(attributes: &'a [Attribute], kind: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|attr| attr.is(kind))
}

/// Non-blank value of the named argument on the first attribute of `kind`.
///
/// Falls back to the first argument when the attribute was declared with a
/// differently named argument, which is common in hand-written manifests.
pub fn find_value<'a>(attributes: &'a [Attribute], kind: &str, arg_name: &str) -> Option<&'a str> {
    let attr = find(attributes, kind)?;
    attr.value(arg_name)
        .or_else(|| attr.first_value())
        .filter(|value| !value.trim().is_empty())
}
