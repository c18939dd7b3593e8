use crate::errors::{AppError, AppResult};
use crate::models::status::{StatusDef, default_statuses};
use crate::models::team::{TeamMember, default_roster};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (handy for tests and portable
/// installs).
pub const HOME_ENV: &str = "FIELDVISITS_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Chains offered in pickers and shown first in the navigation list.
    #[serde(default = "default_chains")]
    pub chains: Vec<String>,
    /// Allowed visit statuses; the first one is the default for new visits.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<StatusDef>,
    /// Roster seeded into a fresh database.
    #[serde(default = "default_roster")]
    pub team: Vec<TeamMember>,
    #[serde(default = "default_csv_prefix")]
    pub csv_prefix: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_chains() -> Vec<String> {
    [
        "Μασούτης",
        "ΑΒ Βασιλόπουλος",
        "Σκλαβενίτης",
        "My Market",
        "Κρητικός",
        "Θανόπουλος",
        "Άλλο",
    ]
    .map(String::from)
    .to_vec()
}

fn default_csv_prefix() -> String {
    "wolt-field-visits".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            chains: default_chains(),
            statuses: default_statuses(),
            team: default_roster(),
            csv_prefix: default_csv_prefix(),
        }
    }
}

impl Config {
    /// Return the configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fieldvisits")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".fieldvisits")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fieldvisits.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fieldvisits.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file take their default values.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.statuses.is_empty() {
            return Err(AppError::Config(
                "at least one status must be configured".to_string(),
            ));
        }
        Ok(())
    }

    pub fn status_ids(&self) -> Vec<String> {
        self.statuses.iter().map(|s| s.id.clone()).collect()
    }

    pub fn status_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.statuses
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.as_str())
            .unwrap_or(id)
    }

    /// Write the configuration file (unless `is_test`) and make sure the
    /// database directory exists. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => PathBuf::from(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::load()?
            };
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}
