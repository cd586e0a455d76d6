use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой SPA (trunk build → dist)
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    /// Фильтр по умолчанию, если не задан RUST_LOG
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            default_filter: "info,tower_http=warn".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"

[logging]
dir = "logs"
default_filter = "info,tower_http=warn"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Returns the path the config was read from (`None` for the embedded default).
/// Tracing is not initialised yet at this point, so the caller logs the source.
pub fn load_config() -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config = parse_config(&contents)?;
            return Ok((config, Some(config_path)));
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, None))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }
    Ok(config)
}

/// Resolve a configured path: absolute paths as is, relative ones next to the executable
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    match exe_dir() {
        Some(dir) => dir.join(path),
        // Fallback: relative to current directory
        None => PathBuf::from(configured),
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.logging.dir, "logs");
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = parse_config(
            r#"
[server]
host = "127.0.0.1"
port = 8080
dist_dir = "/srv/dtmp/dist"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.default_filter, "info,tower_http=warn");
        assert_eq!(
            resolve_path(&config.server.dist_dir),
            PathBuf::from("/srv/dtmp/dist")
        );
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let result = parse_config(
            r#"
[server]
host = "0.0.0.0"
port = 0
dist_dir = "dist"
"#,
        );
        assert!(result.is_err());
    }
}
