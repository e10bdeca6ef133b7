use crate::errors::{AppError, AppResult};
use crate::models::settings::{
    DEFAULT_CURRENCY_SUFFIX, DEFAULT_HOURLY_WAGE, DEFAULT_PAYDAY, Settings,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_hourly_wage")]
    pub default_hourly_wage: i64,
    #[serde(default = "default_payday")]
    pub payday_day_of_month: u32,
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_hourly_wage() -> i64 {
    DEFAULT_HOURLY_WAGE
}
fn default_payday() -> u32 {
    DEFAULT_PAYDAY
}
fn default_currency_suffix() -> String {
    DEFAULT_CURRENCY_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_hourly_wage: default_hourly_wage(),
            payday_day_of_month: default_payday(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftbook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shiftbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// The settings handed to the add path and the display layer.
    pub fn settings(&self) -> Settings {
        Settings {
            default_hourly_wage: self.default_hourly_wage,
            payday_day_of_month: self.payday_day_of_month,
            currency_suffix: self.currency_suffix.clone(),
        }
    }

    pub fn set_default_wage(&mut self, wage: i64) -> AppResult<()> {
        self.default_hourly_wage = Settings::check_wage(wage)?;
        Ok(())
    }

    pub fn set_payday(&mut self, day: u32) -> AppResult<()> {
        self.payday_day_of_month = Settings::check_payday(day)?;
        Ok(())
    }

    pub fn set_currency_suffix(&mut self, suffix: &str) -> AppResult<()> {
        if suffix.trim().is_empty() {
            return Err(crate::errors::ValidationError::EmptyCurrencySuffix.into());
        }
        self.currency_suffix = suffix.trim().to_string();
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// An existing config keeps its settings; only `database` is replaced
    /// when `custom_db` is given. Returns the database path.
    pub fn init_all(custom_db: Option<&str>) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::load()?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => PathBuf::from(&config.database),
        };

        config.database = db_path.to_string_lossy().to_string();
        config.save()?;

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
