pub mod cli;
pub mod core;
pub mod store;

use crate::cli::convert::ConvertArgs;
use crate::core::PathConverter;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert(ConvertArgs),
    Rates { json: bool },
}

/// Loads the configuration, builds the rate store and runs `command`.
/// Returns the rendered output.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<String> {
    info!("fxpath starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = Arc::new(config.build_store());

    match command {
        AppCommand::Convert(args) => {
            let converter = PathConverter::new(Arc::clone(&store));
            cli::convert::run(&converter, &args)
        }
        AppCommand::Rates { json } => cli::rates::run(&store, json),
    }
}
