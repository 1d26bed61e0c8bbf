pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use cli::CliArgs;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TEMP_FOLDER: &str = "./tmp";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 10;

/// Deployment environment. Only changes the log format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Dev,
    Prod,
}

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub env: AppEnv,
    pub host: String,
    pub port: u16,
    pub temp_folder: PathBuf,
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            env: AppEnv::Dev,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            temp_folder: PathBuf::from(DEFAULT_TEMP_FOLDER),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_path("temp_folder", &self.temp_folder)?;
        validate_range("max_upload_mb", self.max_upload_mb, 1, 1024)?;
        Ok(())
    }
}
