use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::errors::ClubError;

const TMP_SUFFIX: &str = "tmp";
const CONFIG_FILE: &str = "config.json";

/// Ledger account names feeding each revenue-mix bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevenueAccounts {
    pub bookings: Vec<String>,
    pub events: Vec<String>,
    pub membership: Vec<String>,
}

impl Default for RevenueAccounts {
    fn default() -> Self {
        Self {
            bookings: vec![
                "tahoe_booking_revenue".into(),
                "clear_lake_booking_revenue".into(),
            ],
            events: vec!["event_revenue".into()],
            membership: vec!["membership_revenue".into()],
        }
    }
}

impl RevenueAccounts {
    /// Every account name across the three buckets.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.bookings
            .iter()
            .chain(self.events.iter())
            .chain(self.membership.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    pub autosave_debounce_ms: u64,
    pub checkout_cutoff_hour: u32,
    #[serde(default)]
    pub revenue_accounts: RevenueAccounts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            autosave_debounce_ms: 2000,
            checkout_cutoff_hour: 11,
            revenue_accounts: RevenueAccounts::default(),
        }
    }
}

impl Config {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ClubError> {
        Self::from_base(base_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ClubError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ClubError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, ClubError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ClubError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn base_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("club_core")
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ClubError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_production_accounts() {
        let config = Config::default();
        assert_eq!(config.autosave_debounce_ms, 2000);
        assert_eq!(config.checkout_cutoff_hour, 11);
        let names: Vec<&str> = config.revenue_accounts.all().collect();
        assert_eq!(
            names,
            vec![
                "tahoe_booking_revenue",
                "clear_lake_booking_revenue",
                "event_revenue",
                "membership_revenue",
            ]
        );
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

        let mut config = Config::default();
        config.autosave_debounce_ms = 500;
        manager.save(&config).expect("save");

        let loaded = manager.load().expect("load");
        assert_eq!(loaded.autosave_debounce_ms, 500);
        assert_eq!(loaded.revenue_accounts, RevenueAccounts::default());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let loaded = manager.load().expect("load");
        assert_eq!(loaded.currency, "USD");
    }
}
