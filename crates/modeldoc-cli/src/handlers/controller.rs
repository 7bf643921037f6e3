//! Controller command handler

use super::utils;
use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use modeldoc_core::export_controllers;
use tracing::instrument;

/// Handle the controller command
#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn handle_controller(
    args: ExportArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::with_details("controller_export", &args.manifest.display().to_string());

    let manifest = utils::load_manifest(&args.manifest)?;
    let types = utils::select_types(manifest.controller_types(), &args.types, "controller")?;
    if types.is_empty() {
        return output.warning(&format!("{} declares no controllers", args.manifest.display()));
    }

    let format = utils::resolve_format(&args, config);
    output.info(&format!("Documenting {} controller(s) as {}", types.len(), format))?;

    let document = export_controllers(&types, format, &utils::export_options(&args, config))?;
    utils::emit(&document, &args, config, output)
}
