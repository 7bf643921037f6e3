//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod controller;
mod formats;
mod model;
mod utils;

pub use completions::handle_completions;
pub use controller::handle_controller;
pub use formats::handle_formats;
pub use model::handle_model;
