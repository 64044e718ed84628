//! CLI command implementations.
//!
//! `init` writes a default configuration and creates the data file, `start`
//! boots the HTTP server, `validate` runs the schema engine once over a
//! record from stdin or a file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::schema::{loader, FormSchema, SchemaValidator};
use crate::service::SubmissionService;
use crate::store::JsonFileStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_record, write_json};

/// Configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file (created on first start)
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Optional path of a schema document replacing the built-in schema
    #[serde(default)]
    pub schema_file: Option<String>,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to; the PORT environment variable overrides it
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_data_file() -> String {
    "./database.json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            schema_file: None,
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file; a missing file yields the defaults.
    /// The PORT environment variable, when set and numeric, overrides the
    /// configured port either way.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

            let config: Config = serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

            config.validate()?;
            config
        } else {
            Config::default()
        };

        if let Some(port) = port_from_env() {
            config.port = port;
        }

        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> CliResult<()> {
        if self.data_file.is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        Ok(())
    }

    /// The HTTP server slice of this configuration.
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

fn port_from_env() -> Option<u16> {
    std::env::var("PORT").ok()?.parse().ok()
}

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
        Command::Validate { config, file } => validate(&config, file.as_deref()),
    }
}

/// `init`: write the default config (if absent) and create the data file.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    if Path::new(&config.data_file).exists() {
        return Err(CliError::already_initialized(&config.data_file));
    }

    if !config_path.exists() {
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, content)
            .map_err(|e| CliError::config_error(format!("Failed to write config: {}", e)))?;
    }

    JsonFileStore::open(&config.data_file)
        .map_err(|e| CliError::io_error(e.to_string()))?;

    Logger::info(
        "INIT_COMPLETE",
        &[
            ("config", &config_path.display().to_string()),
            ("data_file", &config.data_file),
        ],
    );

    Ok(())
}

/// `start`: boot the service and serve until the process exits.
pub fn start(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    let schema = load_schema(&config)?;
    let validator = SchemaValidator::new(schema)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let store = JsonFileStore::open(&config.data_file)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;

    let service = SubmissionService::new(store, validator);
    let server = HttpServer::new(config.http_config(), service);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// `validate`: run the engine once over a record and print the result.
pub fn validate(config_path: &Path, file: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    let schema = load_schema(&config)?;
    let validator = SchemaValidator::new(schema)
        .map_err(|e| CliError::config_error(e.to_string()))?;

    let value = read_record(file)?;
    let record = value.as_object().cloned().unwrap_or_default();
    let errors = validator.validate(&record);

    write_json(&json!({
        "valid": errors.is_empty(),
        "errors": errors,
    }))
}

fn load_schema(config: &Config) -> CliResult<FormSchema> {
    match &config.schema_file {
        Some(path) => loader::load_from_file(Path::new(path))
            .map_err(|e| CliError::config_error(e.to_string())),
        None => Ok(loader::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, "./database.json");
        assert_eq!(config.port, 3000);
        assert!(config.schema_file.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_or_default(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config.port, Config::default().port);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formbase.json");
        fs::write(&path, r#"{"port": 4100}"#).unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.data_file, "./database.json");
    }

    #[test]
    fn test_invalid_config_json_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formbase.json");
        fs::write(&path, "{nope").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_empty_data_file_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formbase.json");
        fs::write(&path, r#"{"data_file": ""}"#).unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_init_creates_config_and_data_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("formbase.json");
        let data_file = tmp.path().join("database.json");
        fs::write(
            &config_path,
            format!(r#"{{"data_file": "{}"}}"#, data_file.display()),
        )
        .unwrap();

        init(&config_path).unwrap();
        assert!(data_file.exists());

        // second init refuses to clobber
        let err = init(&config_path).unwrap_err();
        assert_eq!(
            err.code(),
            &super::super::errors::CliErrorCode::AlreadyInitialized
        );
    }

    #[test]
    fn test_http_config_slice() {
        let config = Config {
            host: "127.0.0.1".into(),
            port: 4200,
            ..Default::default()
        };
        let http = config.http_config();
        assert_eq!(http.socket_addr(), "127.0.0.1:4200");
    }
}
