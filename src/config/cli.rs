use crate::config::toml_config::FileConfig;
use crate::config::{AppEnv, ServerConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Each one falls back to an environment variable, then
/// to the TOML file given by `--config`, then to the built-in default.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pdf-expert")]
#[command(about = "HTTP service that extracts text from uploaded PDFs and counts words")]
pub struct CliArgs {
    #[arg(long, env = "APP_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "APP_ENV", value_enum, help = "dev (text logs) or prod (JSON logs)")]
    pub env: Option<AppEnv>,

    #[arg(long, env = "HTTP_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "HTTP_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "TEMP_FOLDER", help = "Directory where uploads are staged")]
    pub temp_folder: Option<PathBuf>,

    #[arg(long, env = "MAX_UPLOAD_MB", help = "Largest accepted request body, in MiB")]
    pub max_upload_mb: Option<usize>,
}

impl CliArgs {
    /// Merges flags, the optional config file and defaults, then validates.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let config = self.merge(file);
        config.validate()?;
        Ok(config)
    }

    fn merge(&self, file: FileConfig) -> ServerConfig {
        let defaults = ServerConfig::default();

        ServerConfig {
            env: self.env.or(file.env).unwrap_or(defaults.env),
            host: self.host.clone().or(file.host).unwrap_or(defaults.host),
            port: self.port.or(file.port).unwrap_or(defaults.port),
            temp_folder: self
                .temp_folder
                .clone()
                .or(file.temp_folder)
                .unwrap_or(defaults.temp_folder),
            max_upload_mb: self
                .max_upload_mb
                .or(file.max_upload_mb)
                .unwrap_or(defaults.max_upload_mb),
        }
    }
}
