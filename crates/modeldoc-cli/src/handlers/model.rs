//! Model command handler

use super::utils;
use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use modeldoc_core::export_models;
use tracing::instrument;

/// Handle the model command
#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn handle_model(args: ExportArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("model_export", &args.manifest.display().to_string());

    let manifest = utils::load_manifest(&args.manifest)?;
    let types = utils::select_types(manifest.model_types(), &args.types, "model")?;
    if types.is_empty() {
        return output.warning(&format!("{} declares no models", args.manifest.display()));
    }

    let format = utils::resolve_format(&args, config);
    output.info(&format!("Documenting {} model(s) as {}", types.len(), format))?;

    let document = export_models(&types, format, &utils::export_options(&args, config))?;
    utils::emit(&document, &args, config, output)
}
