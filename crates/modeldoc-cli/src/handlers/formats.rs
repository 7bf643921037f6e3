//! Formats command handler

use crate::error::Result;
use crate::output::OutputWriter;
use modeldoc_core::DocumentFormat;

/// Handle the formats command
pub fn handle_formats(output: &mut OutputWriter) -> Result<()> {
    let rows = DocumentFormat::ALL
        .iter()
        .map(|format| {
            vec![
                format.name().to_string(),
                format.extension().to_string(),
                key_style(*format).to_string(),
            ]
        })
        .collect();

    output.table(&["Format", "Extension", "Keys"], rows)
}

fn key_style(format: DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Markdown | DocumentFormat::Csv => "-",
        DocumentFormat::Json => "PascalCase",
        DocumentFormat::Yaml => "camelCase",
    }
}
