//! External XML documentation source
//!
//! Reads compiler-style XML documentation files:
//!
//! ```xml
//! <doc>
//!   <members>
//!     <member name="P:Shop.Models.Order.Total">
//!       <summary>Order total in cents.</summary>
//!     </member>
//!   </members>
//! </doc>
//! ```
//!
//! Summaries are keyed by member name (`P:<FullTypeName>.<Property>` for
//! properties, `M:<FullTypeName>.<Method>(...)` for methods).
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{DocError, DocResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Member summaries loaded from an XML documentation file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocumentation {
    members: HashMap<String, String>,
}

impl XmlDocumentation {
    /// A source with no summaries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Key of a property member
    pub fn property_key(full_type_name: &str, property: &str) -> String {
        format!("P:{}.{}", full_type_name, property)
    }

    /// Key of a method member, without the parameter list
    pub fn method_key(full_type_name: &str, method: &str) -> String {
        format!("M:{}.{}", full_type_name, method)
    }

    /// Parse XML documentation text
    pub fn parse(xml: &str) -> Result<Self, String> {
        let mut reader = Reader::from_str(xml);
        let mut members = HashMap::new();
        let mut current: Option<String> = None;
        let mut summary: Option<String> = None;

        loop {
            match reader.read_event().map_err(|e| e.to_string())? {
                Event::Start(e) => match e.name().as_ref() {
                    b"member" => current = attribute_value(&e, "name")?,
                    b"summary" if current.is_some() => summary = Some(String::new()),
                    _ => {}
                },
                Event::Empty(e) => {
                    // <see cref="T:Shop.Models.Order"/> inside a summary
                    if let Some(text) = summary.as_mut() {
                        if let Some(cref) = attribute_value(&e, "cref")? {
                            push_word(text, cref_display(&cref));
                        }
                    }
                }
                Event::Text(e) => {
                    if let Some(text) = summary.as_mut() {
                        let unescaped = e.unescape().map_err(|e| e.to_string())?;
                        push_word(text, &unescaped);
                    }
                }
                Event::CData(e) => {
                    if let Some(text) = summary.as_mut() {
                        push_word(text, &String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"summary" => {
                        if let (Some(name), Some(text)) = (current.as_ref(), summary.take()) {
                            members.entry(name.clone()).or_insert(normalize_whitespace(&text));
                        }
                    }
                    b"member" => {
                        current = None;
                        summary = None;
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { members })
    }

    /// Read and parse an XML documentation file
    pub fn load(path: &Path) -> DocResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;

        Self::parse(&content).map_err(|reason| DocError::XmlDocumentation {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Load a documentation file, degrading to an empty source.
    ///
    /// Missing files and malformed XML never fail an export; descriptions
    /// simply fall back to `-`.
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "XML documentation file not found");
            return Self::empty();
        }

        match Self::load(path) {
            Ok(docs) => {
                debug!(path = %path.display(), members = docs.len(), "Loaded XML documentation");
                docs
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable XML documentation");
                Self::empty()
            }
        }
    }

    /// Non-empty summary of a member
    pub fn summary(&self, member: &str) -> Option<&str> {
        self.members
            .get(member)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Summary of a property
    pub fn property_summary(&self, full_type_name: &str, property: &str) -> Option<&str> {
        self.summary(&Self::property_key(full_type_name, property))
    }

    /// Summary of a method, matching any overload's parameter list
    pub fn method_summary(&self, full_type_name: &str, method: &str) -> Option<&str> {
        let key = Self::method_key(full_type_name, method);
        if let Some(text) = self.summary(&key) {
            return Some(text);
        }

        let overload_prefix = format!("{}(", key);
        // HashMap order is unstable; pick the lexically first overload
        self.members
            .iter()
            .filter(|(name, text)| name.starts_with(&overload_prefix) && !text.is_empty())
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, text)| text.as_str())
    }

    /// Number of documented members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no member is documented
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn attribute_value(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, String> {
    let attr = element.try_get_attribute(name).map_err(|e| e.to_string())?;
    match attr {
        Some(attr) => {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

fn cref_display(cref: &str) -> &str {
    let name = cref.split_once(':').map(|(_, rest)| rest).unwrap_or(cref);
    name.rsplit('.').next().unwrap_or(name)
}

fn push_word(buffer: &mut String, text: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(text);
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
