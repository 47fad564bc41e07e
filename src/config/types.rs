use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{MovieCategory, MovieCategoryFamily};
use crate::repository::DEFAULT_CHANGE_CAPACITY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initially selected category of each home family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "default_popular")]
    pub popular: MovieCategory,
    #[serde(default = "default_now_playing")]
    pub now_playing: MovieCategory,
    #[serde(default = "default_upcoming")]
    pub upcoming: MovieCategory,
}

impl HomeConfig {
    /// Configured selection for `family`.
    pub fn selected(&self, family: MovieCategoryFamily) -> MovieCategory {
        match family {
            MovieCategoryFamily::Popular => self.popular,
            MovieCategoryFamily::NowPlaying => self.now_playing,
            MovieCategoryFamily::Upcoming => self.upcoming,
        }
    }
}

/// Movie source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Buffer of the change signal channel (default: 64).
    #[serde(default = "default_change_channel_capacity")]
    pub change_channel_capacity: usize,
    /// JSON file with the movie list. Built-in sample data when unset.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_popular() -> MovieCategory {
    MovieCategoryFamily::Popular.default_category()
}

fn default_now_playing() -> MovieCategory {
    MovieCategoryFamily::NowPlaying.default_category()
}

fn default_upcoming() -> MovieCategory {
    MovieCategoryFamily::Upcoming.default_category()
}

fn default_change_channel_capacity() -> usize {
    DEFAULT_CHANGE_CAPACITY
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            popular: default_popular(),
            now_playing: default_now_playing(),
            upcoming: default_upcoming(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            change_channel_capacity: default_change_channel_capacity(),
            fixtures: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
