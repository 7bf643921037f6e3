//! Error types for documentation export
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can fail an export or save call.
///
/// Missing metadata never ends up here: the resolver degrades to fallback
/// markers instead. Only unsupported formats, serialization faults and
/// file-system faults reach the caller.
#[derive(Error, Debug)]
pub enum DocError {
    /// The requested output format is not one of markdown, csv, json or yaml
    #[error("Unsupported format '{format}'. Expected markdown, csv, json or yaml")]
    UnsupportedFormat { format: String },

    /// File I/O errors while saving documents
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML documentation file could not be read or parsed
    #[error("Invalid XML documentation '{path}': {reason}")]
    XmlDocumentation { path: PathBuf, reason: String },

    /// Type manifest could not be read or parsed
    #[error("Invalid manifest '{path}': {reason}")]
    Manifest { path: PathBuf, reason: String },
}

impl DocError {
    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a manifest error with path context
    pub fn manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failures raised while instantiating a type or reading a property off it.
///
/// These never escape an export; the property resolver turns them into the
/// `-` fallback marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    /// The constructor reported a failure
    #[error("Failed to construct '{type_name}': {reason}")]
    Construction { type_name: String, reason: String },

    /// The property getter reported a failure
    #[error("Failed to read property '{property}': {reason}")]
    PropertyAccess { property: String, reason: String },

    /// The instance handed to a getter was not of the expected type
    #[error("Instance is not a '{expected}'")]
    InstanceMismatch { expected: String },
}

impl ReflectError {
    /// Create a construction error
    pub fn construction(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Construction {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a property access error
    pub fn property_access(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PropertyAccess {
            property: property.into(),
            reason: reason.into(),
        }
    }
}
