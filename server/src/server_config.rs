use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
    pub room_id_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: "ui".to_string(),
            room_id_length: 6,
        }
    }
}

impl ServerConfig {
    /// Reads the YAML config at `path`; a missing file yields the
    /// defaults, any other read or parse failure is an error.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: ServerConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("Invalid bind address: {}", self.bind_address));
        }
        if self.room_id_length < 4 || self.room_id_length > 16 {
            return Err("Room id length must be between 4 and 16".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ServerConfig::load(Some("does_not_exist.yaml")).unwrap();
        assert_eq!(config.room_id_length, ServerConfig::default().room_id_length);
    }

    #[test]
    fn test_rejects_short_room_ids() {
        let config = ServerConfig {
            room_id_length: 2,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let config = ServerConfig {
            bind_address: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
