use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub create_db_if_missing: bool,
}

impl Settings {
    /// Defaults, then `trivia.toml` (or `config_file` when given), then `TRIVIA_*` variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("db_path", "trivia.db")?
            .set_default("create_db_if_missing", true)?;
        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("trivia").required(false)),
        };
        builder
            .add_source(Environment::with_prefix("TRIVIA").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
