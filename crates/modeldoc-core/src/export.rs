//! Public export surface
//!
//! Every call rebuilds its descriptors from the live type description, renders
//! them and discards them. Nothing is cached between calls.
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::{ControllerDescriptor, ModelDescriptor};
use crate::error::DocResult;
use crate::reflect::{Reflect, TypeInfo};
use crate::render::{self, text, DocumentFormat, TextFormat};
use crate::xmldoc::XmlDocumentation;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Per-call export settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// XML documentation file consulted when no description metadata is attached
    pub xml_documentation: Option<PathBuf>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the XML documentation file at `path` as description fallback
    pub fn with_xml_documentation(mut self, path: impl Into<PathBuf>) -> Self {
        self.xml_documentation = Some(path.into());
        self
    }

    /// Load the configured documentation source, empty when none is set
    fn documentation(&self) -> XmlDocumentation {
        self.xml_documentation
            .as_deref()
            .map(XmlDocumentation::load_or_empty)
            .unwrap_or_default()
    }

    fn xml_path(&self) -> Option<&Path> {
        self.xml_documentation.as_deref()
    }
}

/// Markdown table documenting the model `T`
pub fn export_model_as_markdown<T: Reflect>(options: &ExportOptions) -> String {
    let model = ModelDescriptor::build(&T::type_info(), &options.documentation());
    text::render(&model, TextFormat::Markdown)
}

/// CSV table documenting the model `T`
pub fn export_model_as_csv<T: Reflect>(options: &ExportOptions) -> String {
    let model = ModelDescriptor::build(&T::type_info(), &options.documentation());
    text::render(&model, TextFormat::Csv)
}

/// Indented JSON documenting the model `T`
pub fn export_model_as_json<T: Reflect>(options: &ExportOptions) -> DocResult<String> {
    export_model::<T>(DocumentFormat::Json, options)
}

/// YAML documenting the model `T`
pub fn export_model_as_yaml<T: Reflect>(options: &ExportOptions) -> DocResult<String> {
    export_model::<T>(DocumentFormat::Yaml, options)
}

/// Document the model `T` in any format
pub fn export_model<T: Reflect>(
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    export_type(&T::type_info(), format, options)
}

/// Document one described model
#[instrument(
    skip_all,
    fields(model = %type_info.name, format = %format, xml = ?options.xml_path())
)]
pub fn export_type(
    type_info: &TypeInfo,
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    let model = ModelDescriptor::build(type_info, &options.documentation());
    render::render(&model, format)
}

/// Document several models as one concatenated output, in the given order
#[instrument(skip_all, fields(models = types.len(), format = %format, xml = ?options.xml_path()))]
pub fn export_models(
    types: &[TypeInfo],
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    let models = ModelDescriptor::build_all(types, &options.documentation());
    render::render_batch(&models, format)
}

/// Document the controller `T` in any format
pub fn export_controller<T: Reflect>(
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    export_controller_info(&T::type_info(), format, options)
}

/// Document one described controller
#[instrument(
    skip_all,
    fields(controller = %type_info.name, format = %format, xml = ?options.xml_path())
)]
pub fn export_controller_info(
    type_info: &TypeInfo,
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    let controller = ControllerDescriptor::build(type_info, &options.documentation());
    render::render(&controller, format)
}

/// Document several controllers as one concatenated output, in the given order
#[instrument(
    skip_all,
    fields(controllers = types.len(), format = %format, xml = ?options.xml_path())
)]
pub fn export_controllers(
    types: &[TypeInfo],
    format: DocumentFormat,
    options: &ExportOptions,
) -> DocResult<String> {
    let controllers = ControllerDescriptor::build_all(types, &options.documentation());
    render::render_batch(&controllers, format)
}
