//! Settings file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::discovery::{DiscoveryMode, DiscoveryRoot};

const SETTINGS_VERSION: u32 = 1;

/// Persistent tool settings, stored as TOML.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Settings {
    pub version: u32,
    #[serde(default)]
    pub roots: Vec<RootSetting>,
}

/// One configured root directory.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RootSetting {
    pub path: PathBuf,
    /// Discovery mode: `"workspace"` treats the root itself as the candidate
    /// repository; any other value (or absence) scans one level of child
    /// directories.
    #[serde(default)]
    pub mode: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            roots: Vec::new(),
        }
    }
}

pub fn default_settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
    Ok(config_dir.join("repo-roster").join("config.toml"))
}

impl Settings {
    /// Loads settings from `settings_path`, or the default location when
    /// none is given. A missing file yields the defaults and writes them
    /// out so the user has something to edit.
    pub fn load(settings_path: Option<PathBuf>) -> Result<Self> {
        let path = match settings_path {
            Some(p) => p,
            None => default_settings_path()?,
        };

        if !path.exists() {
            let default_settings = Settings::default();
            default_settings.save(&path)?;
            return Ok(default_settings);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
        Ok(())
    }

    /// Roots ready for a discovery pass. An empty roots list falls back to
    /// the current directory in subfolders mode, so the tool is useful with
    /// no settings file at all.
    pub fn discovery_roots(&self) -> Vec<DiscoveryRoot> {
        if self.roots.is_empty() {
            return vec![DiscoveryRoot {
                path: PathBuf::from("."),
                mode: DiscoveryMode::Subfolders,
            }];
        }
        self.roots
            .iter()
            .map(|root| DiscoveryRoot {
                path: root.path.clone(),
                mode: DiscoveryMode::from_setting(&root.mode),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_settings_fall_back_to_current_directory() {
        let settings = Settings::default();
        let roots = settings.discovery_roots();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path, PathBuf::from("."));
        assert_eq!(roots[0].mode, DiscoveryMode::Subfolders);
    }

    #[test]
    fn test_mode_strings_map_onto_discovery_modes() {
        let settings: Settings = toml::from_str(
            r#"
            version = 1

            [[roots]]
            path = "/home/me/src"

            [[roots]]
            path = "/home/me/project"
            mode = "workspace"

            [[roots]]
            path = "/home/me/other"
            mode = "something-unrecognized"
            "#,
        )
        .unwrap();

        let roots = settings.discovery_roots();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0].mode, DiscoveryMode::Subfolders);
        assert_eq!(roots[1].mode, DiscoveryMode::WorkspaceRoot);
        assert_eq!(roots[2].mode, DiscoveryMode::Subfolders);
    }

    #[test]
    fn test_missing_file_yields_defaults_and_writes_them() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings::load(Some(path.clone())).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let settings = Settings {
            version: SETTINGS_VERSION,
            roots: vec![RootSetting {
                path: PathBuf::from("/srv/repos"),
                mode: "workspace".to_string(),
            }],
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(Some(path)).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_garbled_file_is_a_hard_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "this is not toml [[[").unwrap();
        assert!(Settings::load(Some(path)).is_err());
    }
}
