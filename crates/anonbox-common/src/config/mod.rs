//! Configuration loading

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, ConfigError, DatabaseConfig, GithubConfig, RateLimitConfig,
    ServerConfig,
};
