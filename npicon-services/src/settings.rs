// SPDX-License-Identifier: LGPL-3.0-only
use anyhow::Result;
use indexmap::IndexMap;
use npicon_raster::color::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

use crate::icon::DEFAULT_ICON_SIZE;

/// Prefix of the XDG directories searched for configuration.
pub const XDG_PREFIX: &str = "npicon-0";

/// Configuration file name inside the XDG directories.
pub const CONFIG_FILE: &str = "icons.toml";

/// Smallest accepted canvas size.
pub const MIN_ICON_SIZE: u32 = 8;

/// Largest accepted canvas size.
pub const MAX_ICON_SIZE: u32 = 256;

/// The main configuration structure for the icon service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Rasterizer settings
    #[serde(default)]
    pub icons: IconSettings,
    /// Base color overrides, icon name -> color
    #[serde(default)]
    pub palette: IndexMap<String, Color>,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconSettings {
    pub size: Option<u32>,
    pub pregenerate: Option<bool>,
    pub warn_unknown: Option<bool>,
}

impl IconSettings {
    /// Canvas side length, clamped to [MIN_ICON_SIZE, MAX_ICON_SIZE].
    pub fn size(&self) -> u32 {
        self.size
            .unwrap_or(DEFAULT_ICON_SIZE)
            .clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
    }

    /// Whether the whole catalog is generated at startup. Defaults to `true`.
    pub fn pregenerate(&self) -> bool {
        self.pregenerate.unwrap_or(true)
    }

    /// Whether unknown identifiers are logged at warn level. Defaults to `true`.
    pub fn warn_unknown(&self) -> bool {
        self.warn_unknown.unwrap_or(true)
    }
}

impl Config {
    /// Parse a configuration from TOML.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))
    }
}

/// Interpret the usual spellings of an enabled or disabled flag.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enable" => Some(true),
        "false" | "0" | "no" | "off" | "disable" => Some(false),
        _ => None,
    }
}

/// Every existing config file, lowest precedence first. Each file appears once.
fn config_paths(xdg_dirs: &BaseDirectories) -> Vec<PathBuf> {
    // Both iterators yield the home directory first.
    let data = xdg_dirs.find_data_files(CONFIG_FILE).collect::<Vec<_>>();
    let config = xdg_dirs.find_config_files(CONFIG_FILE).collect::<Vec<_>>();
    data.into_iter().rev().chain(config.into_iter().rev()).collect()
}

/// Registry for managing icon service settings.
pub struct SettingsRegistry {
    config: Config,
}

impl SettingsRegistry {
    /// Create a SettingsRegistry with built-in defaults only.
    pub fn with_defaults() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create a new SettingsRegistry and load configuration from standard
    /// locations, then from the environment.
    pub fn new() -> Result<Self> {
        let mut registry = Self::with_defaults();
        registry.load()?;
        registry.apply_env_overrides();
        Ok(registry)
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/npicon-0/icons.toml (and XDG_DATA_DIRS)
    /// 2. User Data: ~/.local/share/npicon-0/icons.toml (XDG_DATA_HOME)
    /// 3. System Config: /etc/xdg/npicon-0/icons.toml (and XDG_CONFIG_DIRS)
    /// 4. User Config: ~/.config/npicon-0/icons.toml (XDG_CONFIG_HOME)
    pub fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        for path in config_paths(&xdg_dirs) {
            self.load_file(&path);
        }
        Ok(())
    }

    /// Load one file, logging and skipping it if it cannot be used.
    pub fn load_file(&mut self, path: &Path) {
        log::info!("Loading icon config from: {:?}", path);
        match fs::read_to_string(path) {
            Ok(content) => match Config::from_toml(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Load configuration from multiple custom paths, in order.
    pub fn load_from_paths(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        paths
            .into_iter()
            .map(|path| -> Result<()> {
                let loaded_config = Config::from_file(&path)?;
                self.merge(loaded_config);
                Ok(())
            })
            .collect()
    }

    /// Apply `NPICON_ICON_SIZE` and `NPICON_PREGENERATE` from the environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("NPICON_ICON_SIZE") {
            match val.trim().parse::<u32>() {
                Ok(size) => {
                    log::info!("NPICON_ICON_SIZE={} detected", size);
                    self.config.icons.size = Some(size);
                },
                Err(_) => log::warn!("NPICON_ICON_SIZE={} is not a number, ignoring", val),
            }
        }
        if let Some(val) = lookup("NPICON_PREGENERATE") {
            match parse_flag(&val) {
                Some(enabled) => self.config.icons.pregenerate = Some(enabled),
                None => log::debug!(
                    "NPICON_PREGENERATE={} not understood (expected: true, 1, yes, on, enable or their negations)",
                    val
                ),
            }
        }
    }

    /// Merge a loaded config into the current config.
    fn merge(&mut self, other: Config) {
        // General
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        // Icons
        if let Some(size) = other.icons.size {
            self.config.icons.size = Some(size);
        }
        if let Some(pregenerate) = other.icons.pregenerate {
            self.config.icons.pregenerate = Some(pregenerate);
        }
        if let Some(warn) = other.icons.warn_unknown {
            self.config.icons.warn_unknown = Some(warn);
        }

        // Palette, entry by entry
        self.config.palette.extend(other.palette);

        // Other
        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let registry = SettingsRegistry::with_defaults();
        let icons = &registry.get().icons;
        assert_eq!(icons.size(), DEFAULT_ICON_SIZE);
        assert!(icons.pregenerate());
        assert!(icons.warn_unknown());
        assert!(registry.get().palette.is_empty());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml(
            r##"
            [general]
            log_level = "debug"

            [icons]
            size = 48
            pregenerate = false
            warn_unknown = false

            [palette]
            check = "#2ecc71"
            stop = "#00000080"

            [extra]
            anything = 1
            "##,
        )
        .unwrap();

        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.icons.size(), 48);
        assert!(!config.icons.pregenerate());
        assert!(!config.icons.warn_unknown());
        assert_eq!(config.palette["check"], Color::rgb(0x2e, 0xcc, 0x71));
        assert_eq!(config.palette["stop"], Color::rgba(0, 0, 0, 0x80));
        assert!(config.other.contains_key("extra"));
    }

    #[test]
    fn test_size_is_clamped() {
        let tiny = IconSettings { size: Some(1), ..Default::default() };
        let huge = IconSettings { size: Some(10_000), ..Default::default() };
        assert_eq!(tiny.size(), MIN_ICON_SIZE);
        assert_eq!(huge.size(), MAX_ICON_SIZE);
    }

    #[test]
    fn test_invalid_palette_color_rejects_file() {
        assert!(Config::from_toml("[palette]\ncheck = \"green\"").is_err());
    }

    #[test]
    fn test_merge_later_file_wins_field_by_field() {
        let mut registry = SettingsRegistry::with_defaults();
        registry.merge(Config::from_toml("[icons]\nsize = 24\npregenerate = false\n[palette]\ncheck = \"#000000\"").unwrap());
        registry.merge(Config::from_toml("[icons]\npregenerate = true\n[palette]\nstop = \"#ffffff\"").unwrap());

        let config = registry.get();
        assert_eq!(config.icons.size(), 24);
        assert!(config.icons.pregenerate());
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.palette["check"], Color::BLACK);
    }

    #[test]
    fn test_overrides() {
        let mut registry = SettingsRegistry::with_defaults();
        registry.apply_overrides(|key| match key {
            "NPICON_ICON_SIZE" => Some("64".to_string()),
            "NPICON_PREGENERATE" => Some("off".to_string()),
            _ => None,
        });
        assert_eq!(registry.get().icons.size(), 64);
        assert!(!registry.get().icons.pregenerate());

        registry.apply_overrides(|key| (key == "NPICON_ICON_SIZE").then(|| "big".to_string()));
        assert_eq!(registry.get().icons.size(), 64);
    }

    #[test]
    fn test_load_from_paths_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        let bad = dir.path().join("bad.toml");
        fs::File::create(&good).unwrap().write_all(b"[icons]\nsize = 16\n").unwrap();
        fs::File::create(&bad).unwrap().write_all(b"[icons\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let mut registry = SettingsRegistry::with_defaults();
        let results = registry.load_from_paths(vec![good, bad, missing]);

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_err());
        assert_eq!(registry.get().icons.size(), 16);
    }

    #[test]
    fn test_config_paths_visit_each_file_once() {
        let root = tempfile::tempdir().unwrap();
        let dir = |name: &str| {
            let base = root.path().join(name);
            fs::create_dir_all(base.join(XDG_PREFIX)).unwrap();
            base
        };
        let (data_dirs, data_home) = (dir("data-dirs"), dir("data-home"));
        let (config_dirs, config_home) = (dir("config-dirs"), dir("config-home"));
        std::env::set_var("XDG_DATA_DIRS", &data_dirs);
        std::env::set_var("XDG_DATA_HOME", &data_home);
        std::env::set_var("XDG_CONFIG_DIRS", &config_dirs);
        std::env::set_var("XDG_CONFIG_HOME", &config_home);

        // Without a user file the system config is still read only once.
        fs::write(config_dirs.join(XDG_PREFIX).join(CONFIG_FILE), "[icons]\nsize = 24\n").unwrap();
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX).unwrap();
        assert_eq!(
            config_paths(&xdg_dirs),
            vec![config_dirs.join(XDG_PREFIX).join(CONFIG_FILE)]
        );

        let files: Vec<PathBuf> = [(&data_dirs, 16), (&data_home, 20), (&config_home, 48)]
            .into_iter()
            .map(|(base, size)| {
                let path = base.join(XDG_PREFIX).join(CONFIG_FILE);
                fs::write(&path, format!("[icons]\nsize = {}\n", size)).unwrap();
                path
            })
            .collect();
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX).unwrap();
        assert_eq!(
            config_paths(&xdg_dirs),
            vec![
                files[0].clone(),
                files[1].clone(),
                config_dirs.join(XDG_PREFIX).join(CONFIG_FILE),
                files[2].clone(),
            ]
        );

        let mut registry = SettingsRegistry::with_defaults();
        registry.load().unwrap();
        assert_eq!(registry.get().icons.size(), 48);
    }

    #[test]
    fn test_load_file_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.toml");
        fs::write(&path, "this is not toml = = =").unwrap();

        let mut registry = SettingsRegistry::with_defaults();
        registry.load_file(&path);
        assert_eq!(registry.get().icons.size(), DEFAULT_ICON_SIZE);
    }
}
