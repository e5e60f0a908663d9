// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Optional: apply schema.sql and seed the demo photo catalog on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn from_env_reads_required_and_defaulted_values() {
    env::set_var("DATABASE_URL", "postgres://localhost/photostore");
    env::remove_var("SERVER_HOST");
    env::remove_var("SERVER_PORT");
    env::remove_var("SEED_DB");

    let cfg = AppConfig::from_env().expect("config should load");
    assert_eq!(cfg.database_url, "postgres://localhost/photostore");
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert!(!cfg.seed_db);
  }

  #[test]
  #[serial]
  fn from_env_fails_without_database_url() {
    env::remove_var("DATABASE_URL");
    assert!(AppConfig::from_env().is_err());
  }

  #[test]
  #[serial]
  fn from_env_rejects_non_numeric_port() {
    env::set_var("DATABASE_URL", "postgres://localhost/photostore");
    env::set_var("SERVER_PORT", "not-a-port");

    assert!(AppConfig::from_env().is_err());
    env::remove_var("SERVER_PORT");
  }
}
