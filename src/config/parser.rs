use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The file must exist: a missing config is a fatal startup error, reported
/// with enough context for the user to create one.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Validation(format!(
            "Could not find {}. Create a config file with [run], [openai], [google] and [[target]] sections",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok(config)
}
