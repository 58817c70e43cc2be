use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ImageFormat;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub screenshot_folder: PathBuf,
    pub image_format: ImageFormat,
    pub file_name_format: String,
    pub date_format: String,
    #[serde(default = "default_target_process_name")]
    pub target_process_name: String,
    #[serde(default)]
    pub telemetry_url: Option<String>,
    #[serde(default = "default_telemetry_timeout_ms")]
    pub telemetry_timeout_ms: u64,
}

fn default_target_process_name() -> String {
    global_constants::DEFAULT_TARGET_PROCESS_NAME.to_string()
}

fn default_telemetry_timeout_ms() -> u64 {
    global_constants::DEFAULT_TELEMETRY_TIMEOUT_MS
}

fn default_screenshot_folder() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(global_constants::APPLICATION_DIRECTORY)
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            screenshot_folder: default_screenshot_folder(),
            image_format: ImageFormat::default(),
            file_name_format: global_constants::DEFAULT_FILE_NAME_FORMAT.to_string(),
            date_format: global_constants::DEFAULT_DATE_FORMAT.to_string(),
            target_process_name: default_target_process_name(),
            telemetry_url: None,
            telemetry_timeout_ms: default_telemetry_timeout_ms(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Screenshot folder: {:?}, format: {}",
            settings.screenshot_folder,
            settings.image_format
        );
        log::debug!(
            "[SETTINGS] File name format: {}, date format: {}",
            settings.file_name_format,
            settings.date_format
        );

        Ok(settings)
    }

    #[allow(dead_code)]
    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to(&settings_path)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    #[allow(dead_code)]
    pub fn restore_defaults(&mut self) {
        log::info!("[SETTINGS] Restoring default settings");
        *self = Self::default();
    }

    pub fn telemetry_timeout(&self) -> Duration {
        Duration::from_millis(self.telemetry_timeout_ms)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_DIRECTORY);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
