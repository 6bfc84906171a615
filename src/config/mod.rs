mod schema;

pub use schema::ServerConfig;

use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Get the config directory path (~/.config/receipt-points/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("receipt-points"))
}

/// Get the default config file path (~/.config/receipt-points/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<ServerConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ServerConfig::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

/// Parse configuration from a YAML string
pub fn parse_config(content: &str) -> Result<ServerConfig> {
    let config: ServerConfig = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Validate server configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.host.trim().is_empty() {
        errors.push("host: must not be empty".to_string());
    } else if let Err(e) = config.socket_addr() {
        errors.push(format!("host: invalid address '{}' - {}", config.host, e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl ServerConfig {
    /// Address to bind, from `host` and `port`
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.enable_cors);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let config = parse_config("port: 9090\n").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_parse_full_yaml() {
        let config = parse_config("host: 127.0.0.1\nport: 3000\nenable_cors: true\n").unwrap();
        assert_eq!(
            config,
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                enable_cors: true,
            }
        );
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_config("hots: 127.0.0.1\n").is_err());
    }

    #[test]
    fn test_out_of_range_port_rejected() {
        assert!(parse_config("port: 70000\n").is_err());
    }

    #[test]
    fn test_validate_empty_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..ServerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("host"));
    }

    #[test]
    fn test_validate_unparseable_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("receipt_points_test_missing_config.yaml");
        let _ = std::fs::remove_file(&path);
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join("receipt_points_test_config.yaml");
        std::fs::write(&path, "host: 127.0.0.1\nport: 18080\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.port, 18080);

        let _ = std::fs::remove_file(&path);
    }
}
