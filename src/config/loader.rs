use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::model::MovieCategoryFamily;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/movieapp/config.toml` on Unix/macOS, or the equivalent
    /// from `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movieapp").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every home selection belongs to its family
    /// - The change channel has room for at least one signal
    pub fn validate(&self) -> Result<(), ConfigError> {
        for family in MovieCategoryFamily::ALL {
            let selected = self.home.selected(family);
            if !family.contains(selected) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Home category {:?} does not belong to the {:?} family",
                        selected, family
                    ),
                });
            }
        }

        if self.repository.change_channel_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "repository.change_channel_capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieCategory;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.home.popular, MovieCategory::PopularStreaming);
        assert_eq!(config.repository.change_channel_capacity, 64);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[home]
popular = "POPULAR_FOR_RENT"

[repository]
fixtures = "/data/movies.json"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.home.popular, MovieCategory::PopularForRent);
        assert_eq!(config.home.now_playing, MovieCategory::NowPlayingMovies);
        assert_eq!(
            config.repository.fixtures,
            Some(PathBuf::from("/data/movies.json"))
        );
    }

    #[test]
    fn selection_from_wrong_family_fails_validation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[home]\nupcoming = \"NOW_PLAYING_TV\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let mut config = Config::default();
        config.repository.change_channel_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "invalid { toml }").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("movieapp/config.toml"));
    }
}
