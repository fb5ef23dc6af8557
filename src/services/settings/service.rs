use crate::models::settings::ChipSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "chips.toml";

/// File-backed store for [`ChipSettings`].
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file inside the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "KenBoyle", "EventChips")
            .context("Failed to resolve project directories")?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist yet
    pub fn load(&self) -> Result<ChipSettings> {
        if !self.path.exists() {
            log::info!(
                "No chip settings at {:?}, using defaults",
                self.path
            );
            return Ok(ChipSettings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings: ChipSettings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        log::debug!("Loaded chip settings from {:?}", self.path);
        Ok(settings)
    }

    /// Save settings, creating the parent directory when needed
    pub fn save(&self, settings: &ChipSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory: {:?}", parent)
                })?;
            }
        }

        let contents =
            toml::to_string_pretty(settings).context("Failed to serialize chip settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;

        log::info!("Saved chip settings to {:?}", self.path);
        Ok(())
    }
}
