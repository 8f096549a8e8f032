pub mod app_conf;
pub mod mongo_conf;
pub mod postgres_conf;

pub use app_conf::AppConfig;
pub use mongo_conf::MongoConfig;
pub use postgres_conf::PostgresConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
