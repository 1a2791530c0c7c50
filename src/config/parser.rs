use crate::config::types::Config;
use crate::config::validation::{validate, validate_start_url};
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The file is only parsed here. Validation runs later through
/// [`Config::finalize`], once command line overrides have been applied,
/// because the start URL may come from either place.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use linkrot::config::load_config;
///
/// let config = load_config(Path::new("linkrot.toml")).unwrap();
/// println!("Delay: {}ms", config.crawler.delay_ms);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

impl Config {
    /// Applies the final checks before a crawl may start
    pub fn finalize(self) -> Result<Self, ConfigError> {
        validate(&self)?;
        Ok(self)
    }

    /// Returns the start URL, trimmed
    ///
    /// Fails with [`ConfigError::MissingStartUrl`] when none was given and
    /// with [`ConfigError::InvalidUrl`] unless it is an absolute http(s)
    /// URL with a host.
    pub fn start_url(&self) -> Result<&str, ConfigError> {
        match self.crawler.start_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                validate_start_url(url)?;
                Ok(url)
            }
            _ => Err(ConfigError::MissingStartUrl),
        }
    }
}
