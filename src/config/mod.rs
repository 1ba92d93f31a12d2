use crate::errors::{AppError, AppResult};
use crate::store::Backend;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (useful for tests and portable installs).
pub const HOME_ENV: &str = "TRELOG_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database of the normalized backend. When unset, logs go to the snapshot file.
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
    /// Signed-in user for the normalized backend.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

fn default_snapshot_file() -> String {
    Config::config_dir()
        .join("trelog-snapshot.json")
        .to_string_lossy()
        .to_string()
}

fn default_weight_unit() -> String {
    "kg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            snapshot_file: default_snapshot_file(),
            user: None,
            weight_unit: default_weight_unit(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$TRELOG_HOME`, else `~/.trelog`
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trelog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trelog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("trelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The single backend decision of the process.
    pub fn backend(&self) -> Backend {
        match &self.database {
            Some(db) if !db.trim().is_empty() => Backend::Normalized {
                database: db.clone(),
            },
            _ => Backend::Snapshot {
                file: PathBuf::from(&self.snapshot_file),
            },
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database paths.
    /// Returns the path of the database that should be created.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let mut config = Self::load().unwrap_or_default();
            config.database = Some(db_path.to_string_lossy().to_string());

            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
