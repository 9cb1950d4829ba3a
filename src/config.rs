use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    // Populated from the .env file
    pub database_path: String,
    pub db_name: String,
    pub upload_dir: String,
    pub template_dir: String,
    pub log_level: String,
    pub max_upload_size_mb: u64,
}

impl Config {
    pub fn from_env(env_path: &Path) -> Result<Self, config::ConfigError> {
        dotenvy::from_path(env_path).map_err(|e| {
            config::ConfigError::Message(format!(
                "FATAL: Failed to load .env file from '{}'. Error: {}",
                env_path.display(),
                e
            ))
        })?;

        let database_path = required_var("DATABASE_PATH")?;
        let upload_dir = required_var("UPLOAD_DIR")?;

        for (key, value) in [("DATABASE_PATH", &database_path), ("UPLOAD_DIR", &upload_dir)] {
            if Path::new(value).is_relative() {
                return Err(config::ConfigError::Message(format!(
                    "FATAL: The '{}' in your .env file is a relative path ('{}'). It MUST be an absolute path.",
                    key, value
                )));
            }
        }

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "weblat".to_string());
        if db_name.is_empty() || !db_name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return Err(config::ConfigError::Message(
                "FATAL: 'DB_NAME' must not be empty and can only contain letters, numbers, underscores, and hyphens.".to_string(),
            ));
        }

        let template_dir = env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_upload_size_mb = match env::var("MAX_UPLOAD_SIZE_MB") {
            Ok(raw) => parse_upload_cap(&raw)?,
            Err(_) => 10,
        };

        let builder = config::Config::builder()
            .set_default("web.host", "127.0.0.1")?
            .set_default("web.port", 8080)?
            .add_source(config::File::new("config/default.toml", config::FileFormat::Toml).required(false))
            .set_override("database_path", database_path)?
            .set_override("db_name", db_name)?
            .set_override("upload_dir", upload_dir)?
            .set_override("template_dir", template_dir)?
            .set_override("log_level", log_level)?
            .set_override("max_upload_size_mb", max_upload_size_mb as i64)?
            .build()?;

        builder.try_deserialize()
    }

    /// Full path to the SQLite database file.
    pub fn database_file(&self) -> PathBuf {
        PathBuf::from(&self.database_path).join(format!("{}.db", self.db_name))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_size_mb * 1024 * 1024
    }
}

fn required_var(key: &str) -> Result<String, config::ConfigError> {
    env::var(key).map_err(|_| {
        config::ConfigError::Message(format!(
            "FATAL: Environment variable '{}' is not set in your .env file.",
            key
        ))
    })
}

fn parse_upload_cap(raw: &str) -> Result<u64, config::ConfigError> {
    let in_range = |mb: u64| mb.checked_mul(1024 * 1024).map_or(false, |bytes| bytes <= i64::MAX as u64);
    match raw.trim().parse::<u64>() {
        Ok(mb) if mb > 0 && in_range(mb) => Ok(mb),
        _ => Err(config::ConfigError::Message(format!(
            "FATAL: 'MAX_UPLOAD_SIZE_MB' must be a positive whole number that fits in bytes, got '{}'.",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            web: WebConfig { host: "0.0.0.0".to_string(), port: 8080 },
            database_path: "/var/lib/weblat".to_string(),
            db_name: "weblat".to_string(),
            upload_dir: "/var/lib/weblat/uploads".to_string(),
            template_dir: "templates".to_string(),
            log_level: "info".to_string(),
            max_upload_size_mb: 10,
        }
    }

    #[test]
    fn derived_paths() {
        let config = sample();
        assert_eq!(config.database_file(), PathBuf::from("/var/lib/weblat/weblat.db"));
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_upload_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn upload_cap_must_be_positive() {
        assert_eq!(parse_upload_cap(" 25 ").unwrap(), 25);
        assert!(parse_upload_cap("0").is_err());
        assert!(parse_upload_cap("ten").is_err());
    }

    #[test]
    fn upload_cap_rejects_values_that_overflow_as_bytes() {
        assert!(parse_upload_cap(&u64::MAX.to_string()).is_err());
        assert!(parse_upload_cap(&(u64::MAX / (1024 * 1024)).to_string()).is_err());
        let largest = i64::MAX as u64 / (1024 * 1024);
        assert_eq!(parse_upload_cap(&largest.to_string()).unwrap(), largest);
    }
}
