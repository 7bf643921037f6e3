//! Shared utilities for command handlers

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use modeldoc_core::{save_into_file, DocumentFormat, ExportOptions, Manifest, TypeInfo};
use std::path::Path;

/// Load a type manifest, reporting a missing file before parsing
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(Manifest::load(path)?)
}

/// Pick the requested types in the requested order.
///
/// Names match either the simple or the fully qualified type name. An empty
/// request selects every type in manifest order.
pub fn select_types(
    available: Vec<TypeInfo>,
    requested: &[String],
    kind: &str,
) -> Result<Vec<TypeInfo>> {
    if requested.is_empty() {
        return Ok(available);
    }

    requested
        .iter()
        .map(|name| {
            available
                .iter()
                .find(|info| info.name == *name || info.full_name == *name)
                .cloned()
                .ok_or_else(|| Error::invalid_args(format!("unknown {} type '{}'", kind, name)))
        })
        .collect()
}

/// Format from the command line, then the configuration, then Markdown
pub fn resolve_format(args: &ExportArgs, config: &Config) -> DocumentFormat {
    args.format
        .map(DocumentFormat::from)
        .or(config.default_format)
        .unwrap_or(DocumentFormat::Markdown)
}

/// Export options from the command line, falling back to the configuration
pub fn export_options(args: &ExportArgs, config: &Config) -> ExportOptions {
    match args.xml_doc.as_ref().or(config.xml_documentation.as_ref()) {
        Some(path) => ExportOptions::new().with_xml_documentation(path),
        None => ExportOptions::new(),
    }
}

/// Print the document, or save it when an output directory is set
pub fn emit(
    document: &str,
    args: &ExportArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let Some(directory) = args.save_to.as_ref().or(config.output.directory.as_ref()) else {
        return output.document(document);
    };

    let file_name = args.file_name.as_deref().unwrap_or(&config.output.file_name);
    let append = args.append || config.output.append;

    let path = save_into_file(directory, [document], Some(file_name), append)?;
    output.success(&format!("✓ Saved to {}", path.display()))
}
