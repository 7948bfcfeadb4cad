use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Booking/cancellation clock interval for one meal, as "HH:MM" strings.
/// Parsed and validated by `core::windows::WindowTable::from_config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub book_start: String,
    pub book_end: String,
    pub cancel_start: String,
    pub cancel_end: String,
}

impl WindowConfig {
    fn new(book_start: &str, book_end: &str, cancel_start: &str, cancel_end: &str) -> Self {
        Self {
            book_start: book_start.to_string(),
            book_end: book_end.to_string(),
            cancel_start: cancel_start.to_string(),
            cancel_end: cancel_end.to_string(),
        }
    }
}

/// Per-meal windows. The defaults reproduce the windows the original site
/// ran with; they are configuration, not behavior, and may overlap within a
/// meal (cancel may open before booking closes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowsConfig {
    pub breakfast: WindowConfig,
    pub lunch: WindowConfig,
    pub dinner: WindowConfig,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            breakfast: WindowConfig::new("09:00", "10:00", "09:30", "10:30"),
            lunch: WindowConfig::new("07:00", "08:00", "08:00", "09:00"),
            dinner: WindowConfig::new("13:00", "15:00", "15:00", "16:30"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    /// Minutes east of UTC for the local clock. Default 330 (+05:30).
    #[serde(default = "default_offset")]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub windows: WindowsConfig,
}

fn default_offset() -> i32 {
    330
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            utc_offset_minutes: default_offset(),
            windows: WindowsConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mealbook")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".mealbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mealbook.conf")
    }

    pub fn ledger_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("daily_meal_booking.csv")
    }

    pub fn roster_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("users.csv")
    }

    pub fn menu_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("menu_images")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(Self::config_file(), yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(())
    }
}
