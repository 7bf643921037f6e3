//! Rendering of descriptors into Markdown, CSV, JSON and YAML
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

pub mod structured;
pub mod templates;
pub mod text;

pub use structured::NamingConvention;
pub use templates::Template;
pub use text::TextFormat;

use crate::error::{DocError, DocResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output formats supported by every exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Markdown,
    Csv,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Every supported format
    pub const ALL: [DocumentFormat; 4] = [
        DocumentFormat::Markdown,
        DocumentFormat::Csv,
        DocumentFormat::Json,
        DocumentFormat::Yaml,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "markdown",
            DocumentFormat::Csv => "csv",
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "md",
            DocumentFormat::Csv => "csv",
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(DocumentFormat::Markdown),
            "csv" => Ok(DocumentFormat::Csv),
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(DocError::unsupported_format(s)),
        }
    }
}

/// A descriptor that can be rendered in every [`DocumentFormat`]
pub trait Document: Serialize {
    /// Append this document's Markdown or CSV block to `out`
    fn write_text(&self, format: TextFormat, out: &mut String);
}

/// Render one document
pub fn render<D: Document>(document: &D, format: DocumentFormat) -> DocResult<String> {
    match format {
        DocumentFormat::Markdown => Ok(text::render(document, TextFormat::Markdown)),
        DocumentFormat::Csv => Ok(text::render(document, TextFormat::Csv)),
        DocumentFormat::Json => structured::to_json(document),
        DocumentFormat::Yaml => structured::to_yaml(document),
    }
}

/// Render several documents as one concatenated output
pub fn render_batch<D: Document>(documents: &[D], format: DocumentFormat) -> DocResult<String> {
    match format {
        DocumentFormat::Markdown => Ok(text::render_batch(documents, TextFormat::Markdown)),
        DocumentFormat::Csv => Ok(text::render_batch(documents, TextFormat::Csv)),
        DocumentFormat::Json => structured::to_json_batch(documents),
        DocumentFormat::Yaml => structured::to_yaml_batch(documents),
    }
}
