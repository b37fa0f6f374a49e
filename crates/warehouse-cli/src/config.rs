use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Save file used when neither `--file` nor the config names one.
pub const DEFAULT_SAVE_FILE: &str = "result.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub path: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_SAVE_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub color: bool,
    pub unicode: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("WAREHOUSE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<WarehouseConfig> {
    if !path.exists() {
        return Ok(WarehouseConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<WarehouseConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("warehouse"));
        }
    }
    Ok(home_dir()?.join(".config").join("warehouse"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.storage.path, DEFAULT_SAVE_FILE);
        assert_eq!(config.logging.filter, "warn");
        assert!(!config.logging.json);
        assert!(config.ui.color);
        assert!(config.ui.unicode);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\npath = \"/tmp/stock.txt\"\n\n[ui]\ncolor = false\n")
            .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.storage.path, "/tmp/stock.txt");
        assert!(!config.ui.color);
        assert!(config.ui.unicode);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\npath = 3").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
