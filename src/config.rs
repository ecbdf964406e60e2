use std::path::Path;

use crate::error::ConfigError;

/// Bound on the search depth; keeps a move choice comfortably interactive.
const MAX_DEPTH: usize = 8;

/// Search settings for the computer opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Minimax search depth in plies.
    pub depth: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig { depth: 4 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.depth == 0 {
            return Err(ConfigError::Validation("ai.depth must be > 0".into()));
        }
        if self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ai.depth, 4);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = AppConfig {
            ai: AiConfig { depth: 0 },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_excessive_depth_rejected() {
        let config = AppConfig {
            ai: AiConfig { depth: MAX_DEPTH + 1 },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str("[ai]\ndepth = 6\n").unwrap();
        assert_eq!(config.ai.depth, 6);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ai.depth, AppConfig::default().ai.depth);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let path = Path::new("definitely-not-a-real-config-file.toml");
        let config = AppConfig::load_or_default(path).unwrap();
        assert_eq!(config.ai.depth, 4);
    }
}
