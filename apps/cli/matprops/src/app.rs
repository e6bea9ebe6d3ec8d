//! Wiring between parsed arguments and the compute core.

use crate::cli::{Args, Command};
use crate::error::MatpropsError;
use crate::report;

use client_core::{ComputeConfig, Dispatcher};
use common::ErrorLocation;
use models::{ComputationRequest, Operation};

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

const LOG_DIR_NAME: &str = "matprops";

/// Where `matprops.log` goes when `--log-dir` is not given.
pub fn default_log_dir() -> Result<PathBuf, MatpropsError> {
    dirs::cache_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join(LOG_DIR_NAME))
        .ok_or_else(|| MatpropsError::Matprops {
            message: "Platform has no cache directory for logs".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Effective configuration: file, then environment, then flags.
pub fn resolve_config(args: &Args) -> Result<ComputeConfig, MatpropsError> {
    let config_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => ComputeConfig::default_dir().map_err(config_error)?,
    };

    let mut config = load_config(&config_dir)?;
    config.apply_env_overrides();

    if let Some(base_url) = &args.base_url {
        config.remote.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.remote.timeout_secs = timeout;
    }

    config.validate().map_err(config_error)?;

    debug!(
        "Remote engine {} (timeout {}s)",
        config.remote.base_url, config.remote.timeout_secs
    );

    Ok(config)
}

fn load_config(config_dir: &Path) -> Result<ComputeConfig, MatpropsError> {
    ComputeConfig::load(config_dir).map_err(config_error)
}

#[track_caller]
fn config_error(error: client_core::ConfigError) -> MatpropsError {
    MatpropsError::Config {
        message: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Turn the command-line operation name and `name=value` pairs into a request.
#[track_caller]
pub fn build_request(
    operation: &str,
    model: u8,
    parameters: &[(String, f64)],
) -> Result<ComputationRequest, MatpropsError> {
    let operation: Operation = operation.parse().map_err(|_| MatpropsError::InvalidRequest {
        message: format!(
            "Unknown operation '{operation}' (run `matprops list` for the catalogue)"
        ),
        location: ErrorLocation::from(Location::caller()),
    })?;

    parameters
        .iter()
        .fold(
            ComputationRequest::builder(operation).with_model(model),
            |builder, (name, value)| builder.with_parameter(name.as_str(), *value),
        )
        .build()
        .map_err(|e| MatpropsError::InvalidRequest {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Execute the parsed command and return what should be printed on stdout.
pub async fn run(args: &Args) -> Result<String, MatpropsError> {
    match &args.command {
        Command::List => Ok(report::render_catalogue()),
        Command::Compute {
            operation,
            model,
            parameters,
            json,
        } => {
            let request = build_request(operation, *model, parameters)?;
            let config = resolve_config(args)?;

            let dispatcher = Dispatcher::remote_only(&config).map_err(|e| MatpropsError::Config {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!("Computing {} with model {}", request.operation(), request.model());

            let result = dispatcher.compute(&request).await?;

            if *json {
                report::render_json(&result)
            } else {
                Ok(report::render_text(&result))
            }
        }
    }
}
