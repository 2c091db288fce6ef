use crate::errors::{AppError, AppResult};
use crate::models::problem::DEFAULT_REPETITIONS;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "RRECALL_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_repetitions")]
    pub default_repetitions: i32,
    #[serde(default)]
    pub reset_repetitions_on_fail: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_repetitions() -> i32 {
    DEFAULT_REPETITIONS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_repetitions: default_repetitions(),
            reset_repetitions_on_fail: false,
        }
    }
}

impl Config {
    /// `$RRECALL_HOME` when set, `~/.rrecall` otherwise.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rrecall")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rrecall.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rrecall.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.default_repetitions < 1 {
            return Err(AppError::Config(format!(
                "default_repetitions must be at least 1 (got {})",
                self.default_repetitions
            )));
        }
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        Ok(())
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Prepare the configuration directory and file.
    ///
    /// `custom_db` may be absolute or relative to the configuration
    /// directory. In test mode the configuration file is left untouched.
    /// Returns the configuration that `init` should use.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let mut cfg = Self::load()?;
        cfg.database = db_path.to_string_lossy().to_string();

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(cfg)
    }
}
