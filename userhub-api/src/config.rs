/// Configuration management for the API server
///
/// This module loads configuration from environment variables (and an
/// optional `.env` file) and provides a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `APP_NAME`, `APP_VERSION`, `APP_DESCRIPTION`: Shown on the landing page,
///   health endpoints and OpenAPI document
/// - `ENVIRONMENT`: Deployment environment (default: development)
/// - `DEBUG`: Debug flag reported by `/api/health/info` (default: true)
/// - `HOST`: Host to bind to (default: 0.0.0.0)
/// - `PORT`: Port to bind to (default: 8000)
/// - `ALLOWED_ORIGINS`, `ALLOWED_METHODS`, `ALLOWED_HEADERS`: Comma-separated
///   CORS lists, `*` allows everything
/// - `LOG_LEVEL`: Log level used when `RUST_LOG` is unset (default: info)
/// - `SEED_DEMO_USERS`: Start with the `admin`/`user` accounts (default: true)
/// - `STATIC_DIR`: Directory served under `/static` (default: `static`,
///   resolved against the working directory)
///
/// # Example
///
/// ```no_run
/// use userhub_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application metadata
    pub app: AppConfig,

    /// API server configuration
    pub api: ApiConfig,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Whether the store starts with the demo accounts
    pub seed_demo_users: bool,

    /// Directory served under `/static`, relative to the working directory
    /// unless absolute
    pub static_dir: String,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name
    pub name: String,

    /// Reported version
    pub version: String,

    /// One-line description
    pub description: String,

    /// Deployment environment (development, staging, production)
    pub environment: String,

    /// Debug flag
    pub debug: bool,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// CORS settings
    pub cors: CorsConfig,
}

/// CORS configuration
///
/// A list containing `*` allows any value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    pub allowed_methods: Vec<String>,

    /// Allowed request headers
    pub allowed_headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "UserHub".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "User management API with health checks and a landing page"
                    .to_string(),
                environment: "development".to_string(),
                debug: true,
            },
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                cors: CorsConfig {
                    allowed_origins: vec![
                        "http://localhost:3000".to_string(),
                        "http://localhost:8000".to_string(),
                        "http://127.0.0.1:8000".to_string(),
                    ],
                    allowed_methods: vec!["*".to_string()],
                    allowed_headers: vec!["*".to_string()],
                },
            },
            log_level: "info".to_string(),
            seed_demo_users: true,
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value (e.g. a
    /// non-numeric `PORT` or a `DEBUG` that is not a boolean)
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// `from_env` uses the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
            None => defaults.api.port,
        };

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_bool("DEBUG", &raw)?,
            None => defaults.app.debug,
        };

        let seed_demo_users = match lookup("SEED_DEMO_USERS") {
            Some(raw) => parse_bool("SEED_DEMO_USERS", &raw)?,
            None => defaults.seed_demo_users,
        };

        let host = lookup("HOST").unwrap_or(defaults.api.host);

        Ok(Self {
            app: AppConfig {
                name: lookup("APP_NAME").unwrap_or(defaults.app.name),
                version: lookup("APP_VERSION").unwrap_or(defaults.app.version),
                description: lookup("APP_DESCRIPTION").unwrap_or(defaults.app.description),
                environment: lookup("ENVIRONMENT").unwrap_or(defaults.app.environment),
                debug,
            },
            api: ApiConfig {
                host,
                port,
                cors: CorsConfig {
                    allowed_origins: lookup("ALLOWED_ORIGINS")
                        .map(|raw| parse_list(&raw))
                        .unwrap_or(defaults.api.cors.allowed_origins),
                    allowed_methods: lookup("ALLOWED_METHODS")
                        .map(|raw| parse_list(&raw))
                        .unwrap_or(defaults.api.cors.allowed_methods),
                    allowed_headers: lookup("ALLOWED_HEADERS")
                        .map(|raw| parse_list(&raw))
                        .unwrap_or(defaults.api.cors.allowed_headers),
                },
            },
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            seed_demo_users,
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Whether the server runs in production (enables HSTS)
    pub fn is_production(&self) -> bool {
        self.app.environment.eq_ignore_ascii_case("production")
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(name: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be a boolean, got '{}'", name, other),
    }
}
