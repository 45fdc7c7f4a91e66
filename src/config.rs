// src/config.rs
use crate::infrastructure::upload::CloudinarySettings;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    allowed_origins: Vec<String>,
    environment: AppEnvironment,
    cloudinary: Option<CloudinarySettings>,
    max_upload_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://shiori.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

/// Comma-separated origins; an unset or empty list allows any origin.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn parse_positive<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|n| *n > T::default())
        .ok_or_else(|| ConfigError::Invalid(format!("{name} must be a positive integer")))
}

const CLOUDINARY_KEYS: [&str; 3] = [
    "CLOUDINARY_CLOUD_NAME",
    "CLOUDINARY_API_KEY",
    "CLOUDINARY_API_SECRET",
];

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the ones that are present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            Err(_) => default_max_connections(),
        };

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => parse_positive("MAX_UPLOAD_BYTES", &raw)?,
            Err(_) => default_max_upload_bytes(),
        };

        let allowed_origins = parse_origins(env::var("ALLOWED_ORIGINS").ok().as_deref());

        let environment = env::var("APP_ENV")
            .map(|v| AppEnvironment::parse(&v))
            .unwrap_or(AppEnvironment::Development);

        let cloudinary = Self::cloudinary_from_env()?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            allowed_origins,
            environment,
            cloudinary,
            max_upload_bytes,
        })
    }

    fn cloudinary_from_env() -> Result<Option<CloudinarySettings>, ConfigError> {
        Self::cloudinary_from_values(CLOUDINARY_KEYS.map(|key| env::var(key).ok()))
    }

    /// Cloudinary is optional, but its three variables go together.
    fn cloudinary_from_values(
        values: [Option<String>; 3],
    ) -> Result<Option<CloudinarySettings>, ConfigError> {
        let [cloud_name, api_key, api_secret] =
            values.map(|value| value.filter(|v| !v.trim().is_empty()));

        if cloud_name.is_none() && api_key.is_none() && api_secret.is_none() {
            return Ok(None);
        }

        let [name_key, api_key_key, secret_key] = CLOUDINARY_KEYS;
        Ok(Some(CloudinarySettings {
            cloud_name: cloud_name.ok_or(ConfigError::Missing(name_key))?,
            api_key: api_key.ok_or(ConfigError::Missing(api_key_key))?,
            api_secret: api_secret.ok_or(ConfigError::Missing(secret_key))?,
        }))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn environment(&self) -> &AppEnvironment {
        &self.environment
    }

    pub fn cloudinary(&self) -> Option<&CloudinarySettings> {
        self.cloudinary.as_ref()
    }

    /// Largest request body accepted by the image upload endpoint.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
