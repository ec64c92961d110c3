use crate::currency::CurrencyOptions;
use crate::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILENAME: &str = "restaurants.txt";

/// Configuration for food-finder, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinderConfig {
    /// Restaurant file used when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// How prices are rendered in tables
    #[serde(default)]
    pub currency: CurrencyOptions,
}

impl FinderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FinderConfig = serde_json::from_str(&content).map_err(|e| {
            FinderError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but writes the defaults to
    /// `config.json` when there is none yet. A failed write is logged and the
    /// defaults are still returned.
    pub fn load_or_init<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        if config_dir.join(CONFIG_FILENAME).exists() {
            return Self::load(config_dir);
        }

        let config = Self::default();
        match config.save(config_dir) {
            Ok(()) => log::debug!("Wrote default config to {}", config_dir.display()),
            Err(e) => log::warn!("Could not write default config: {}", e),
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Picks the restaurant file: explicit path, then config, then the
    /// default file inside `data_dir`.
    pub fn resolve_data_file(&self, explicit: Option<&Path>, data_dir: &Path) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| data_dir.join(DEFAULT_DATA_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FinderConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.currency, CurrencyOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = FinderConfig::load(dir.path().join("nothing-here")).unwrap();
        assert_eq!(config, FinderConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("nested").join("config");

        let config = FinderConfig {
            data_file: Some(PathBuf::from("/srv/restaurants.txt")),
            currency: CurrencyOptions::default().with_unit("€").with_precision(0),
        };
        config.save(&config_dir).unwrap();

        let loaded = FinderConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("config");

        let config = FinderConfig::load_or_init(&config_dir).unwrap();
        assert_eq!(config, FinderConfig::default());
        assert!(config_dir.join("config.json").exists());
        assert_eq!(FinderConfig::load(&config_dir).unwrap(), config);
    }

    #[test]
    fn test_load_or_init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let config = FinderConfig {
            data_file: None,
            currency: CurrencyOptions::default().with_unit("¥"),
        };
        config.save(dir.path()).unwrap();

        assert_eq!(FinderConfig::load_or_init(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{ "currency": { "separator": "," , "delimiter": "." } }"#,
        )
        .unwrap();

        let config = FinderConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, None);
        assert_eq!(config.currency.unit, "$");
        assert_eq!(config.currency.separator, ",");
        assert_eq!(config.currency.delimiter, ".");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        let err = FinderConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, FinderError::Config(_)));
    }

    #[test]
    fn test_resolve_data_file_order() {
        let data_dir = Path::new("/data");
        let mut config = FinderConfig::default();
        assert_eq!(
            config.resolve_data_file(None, data_dir),
            PathBuf::from("/data/restaurants.txt")
        );

        config.data_file = Some(PathBuf::from("/cfg/r.txt"));
        assert_eq!(
            config.resolve_data_file(None, data_dir),
            PathBuf::from("/cfg/r.txt")
        );
        assert_eq!(
            config.resolve_data_file(Some(Path::new("cli.txt")), data_dir),
            PathBuf::from("cli.txt")
        );
    }
}
