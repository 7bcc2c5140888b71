//! Startup configuration resolution.

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};

/// Load the config file when given, otherwise defaults, then apply the
/// command-line bind override and validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
