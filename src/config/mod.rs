//! Configuration file and command line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig, DEFAULT_BASE_URL};
