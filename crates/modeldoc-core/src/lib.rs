//! Modeldoc Core - documentation generation for data models and route handlers
//!
//! This crate documents the public shape of model types and controller-like
//! types as Markdown tables, CSV tables, indented JSON or YAML:
//! - **Models**: every public instance property with its display name, type,
//!   description, attached attributes and a sample default value
//! - **Controllers**: every public route handler with its HTTP verb, route,
//!   description and parameters
//!
//! ## Features
//!
//! - **Static introspection**: types describe themselves through [`Reflect`]
//! - **Graceful fallbacks**: missing metadata renders as `-`, `null` or `UNKNOWN`
//! - **XML documentation**: optional compiler-style XML summaries as description source
//! - **Manifests**: YAML or JSON descriptions of types outside the program
//! - **File sink**: save generated documents with overwrite or append semantics
//!
//! ## Quick Start
//!
//! ```rust
//! use modeldoc_core::{export_model_as_markdown, ExportOptions, PropertyInfo, Reflect, TypeInfo};
//!
//! struct Person {
//!     name: String,
//!     is_active: bool,
//! }
//!
//! impl Default for Person {
//!     fn default() -> Self {
//!         Self { name: "Bob".into(), is_active: true }
//!     }
//! }
//!
//! impl Reflect for Person {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::builder::<Person>("Person")
//!             .default_constructor()
//!             .property(PropertyInfo::of("Name", |p: &Person| p.name.clone()))
//!             .property(PropertyInfo::of("IsActive", |p: &Person| p.is_active))
//!             .build()
//!     }
//! }
//!
//! let markdown = export_model_as_markdown::<Person>(&ExportOptions::new());
//! assert!(markdown.contains("| Name | String | - | - | \"Bob\" |"));
//! assert!(markdown.contains("| IsActive | bool | - | - | true |"));
//! ```
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

pub mod descriptor;
pub mod error;
pub mod export;
pub mod manifest;
pub mod reflect;
pub mod render;
pub mod sink;
pub mod xmldoc;

// Re-export commonly used types for convenience
pub use descriptor::{
    ControllerDescriptor, MethodDescriptor, ModelDescriptor, ParameterDescriptor,
    PropertyDescriptor,
};
pub use error::{DocError, DocResult, ReflectError};
pub use export::{
    export_controller, export_controller_info, export_controllers, export_model,
    export_model_as_csv, export_model_as_json, export_model_as_markdown, export_model_as_yaml,
    export_models, export_type, ExportOptions,
};
pub use manifest::Manifest;
pub use reflect::{
    Attribute, AttributeArg, Constructor, Getter, MethodInfo, ParameterInfo, PropertyInfo,
    PropertyValue, Reflect, TypeInfo,
};
pub use render::{render, render_batch, Document, DocumentFormat};
pub use sink::{save_into_file, DEFAULT_FILE_NAME};
pub use xmldoc::XmlDocumentation;
