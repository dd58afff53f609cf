use std::path::PathBuf;

use clap::Parser;

use crate::api::GenderFilter;
use crate::config::{Config, ConfigError};
use crate::ui::runtime::StartOptions;

/// Browse Rick and Morty characters in the terminal.
#[derive(Debug, Parser)]
#[command(name = "rickview", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/rickview/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Initial gender filter: all, male, female, genderless, unknown
    #[arg(long, value_name = "FILTER")]
    pub gender: Option<GenderFilter>,

    /// Initial page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,
}

impl Cli {
    /// Loads the config file and applies command line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if let Some(gender) = self.gender {
            config.ui.initial_filter = gender;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn start_options(&self, config: &Config) -> StartOptions {
        StartOptions {
            page: self.page.unwrap_or(1),
            filter: config.ui.initial_filter,
        }
    }
}
