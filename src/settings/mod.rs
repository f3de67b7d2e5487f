/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of tyre-fitment.
 *
 * tyre-fitment is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * tyre-fitment is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with tyre-fitment. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use tyre_geometry::layout::{ProjectionConfig, SidewallMode};
use tyre_geometry::RimAllowances;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub save_images: bool,
    pub save_comparison: bool,
    pub output_folder: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    /// Drawing scale in pixels per inch
    pub image_dpi: u32,
    pub outline_width: u32,
    pub outline_rim_color: String,
    pub outline_tire_color: String,
    pub font_color: String,
    pub font: String,
    pub font_size: u32,
    pub background_color: String,
    pub rim_diameter_lip: f64,
    pub rim_width_additional: f64,
    pub side_view_double_sidewall: bool,
    pub fitments: Vec<String>
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            save_images: true,
            save_comparison: true,
            output_folder: PathBuf::from("output"),
            image_width: 500,
            image_height: 500,
            image_dpi: 16,
            outline_width: 1,
            outline_rim_color: "white".to_string(),
            outline_tire_color: "red".to_string(),
            font_color: "white".to_string(),
            font: "sans-serif".to_string(),
            font_size: 14,
            background_color: "black".to_string(),
            rim_diameter_lip: 1.0,
            rim_width_additional: 1.0,
            side_view_double_sidewall: false,
            fitments: Vec::new()
        }
    }
}

impl Settings {
    pub const CONFIG_FILENAME: &'static str = "tyre-fitment-conf.toml";
    const ENV_PREFIX: &'static str = "TYRE_FITMENT";

    /// Load settings from `path`, falling back to the defaults for any missing key.
    /// `TYRE_FITMENT_*` environment variables override both.
    ///
    /// If there's no file at `path` the defaults are written there so the user
    /// has something to edit next time. A file that exists but can't be parsed
    /// is an error and is left untouched.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Settings::load_with_env_prefix(path, Settings::ENV_PREFIX)
    }

    fn load_with_env_prefix(path: &Path, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Settings::builder()?;
        if path.is_file() {
            info!("Loading settings from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        } else {
            warn!("No settings found at {}. Using defaults", path.display());
            match Settings::default().write(path) {
                Ok(_) => info!("Wrote default settings to {}", path.display()),
                Err(e) => error!("Failed to write settings. {}", e.to_string())
            }
        }
        builder
            .add_source(config::Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("save_images", defaults.save_images)?
            .set_default("save_comparison", defaults.save_comparison)?
            .set_default("output_folder", defaults.output_folder.to_string_lossy().into_owned())?
            .set_default("image_width", defaults.image_width as i64)?
            .set_default("image_height", defaults.image_height as i64)?
            .set_default("image_dpi", defaults.image_dpi as i64)?
            .set_default("outline_width", defaults.outline_width as i64)?
            .set_default("outline_rim_color", defaults.outline_rim_color)?
            .set_default("outline_tire_color", defaults.outline_tire_color)?
            .set_default("font_color", defaults.font_color)?
            .set_default("font", defaults.font)?
            .set_default("font_size", defaults.font_size as i64)?
            .set_default("background_color", defaults.background_color)?
            .set_default("rim_diameter_lip", defaults.rim_diameter_lip)?
            .set_default("rim_width_additional", defaults.rim_width_additional)?
            .set_default("side_view_double_sidewall", defaults.side_view_double_sidewall)?
            .set_default("fitments", defaults.fitments)
    }

    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }

    pub fn allowances(&self) -> RimAllowances {
        RimAllowances {
            rim_diameter_lip_in: self.rim_diameter_lip,
            rim_width_additional_in: self.rim_width_additional
        }
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            canvas_width: self.image_width,
            canvas_height: self.image_height,
            scale: self.image_dpi as f64,
            stroke_width: self.outline_width,
            sidewall_mode: match self.side_view_double_sidewall {
                true => SidewallMode::Doubled,
                false => SidewallMode::Unified
            },
            ..ProjectionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tyre_geometry::layout::SidewallMode;
    use crate::settings::Settings;

    fn temp_settings_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tyre-fitment-{}-{}.toml", std::process::id(), name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = temp_settings_path("missing");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.is_file());
        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded, Settings::default());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_settings_path("partial");
        fs::write(&path, "image_width = 800\nimage_dpi = 20\noutline_tire_color = \"#00ff00\"\nfitments = [\"17x7.5 205/45R17\"]\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.image_width, 800);
        assert_eq!(settings.image_height, 500);
        assert_eq!(settings.image_dpi, 20);
        assert_eq!(settings.outline_tire_color, "#00ff00");
        assert_eq!(settings.fitments, vec!["17x7.5 205/45R17".to_string()]);
        assert_eq!(settings.save_images, true);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn environment_overrides_without_file() {
        let path = temp_settings_path("env-missing");
        let prefix = format!("TYRE_FITMENT_TEST_{}_A", std::process::id());
        std::env::set_var(format!("{}_IMAGE_WIDTH", prefix), "800");
        let settings = Settings::load_with_env_prefix(&path, &prefix).unwrap();
        assert_eq!(settings.image_width, 800);
        assert_eq!(settings.image_height, 500);

        // the written file only holds the defaults
        let written = Settings::load_with_env_prefix(&path, "TYRE_FITMENT_TEST_UNSET").unwrap();
        assert_eq!(written, Settings::default());
        std::env::remove_var(format!("{}_IMAGE_WIDTH", prefix));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn environment_overrides_file() {
        let path = temp_settings_path("env-file");
        fs::write(&path, "image_width = 640\nimage_dpi = 20\n").unwrap();
        let prefix = format!("TYRE_FITMENT_TEST_{}_B", std::process::id());
        std::env::set_var(format!("{}_IMAGE_WIDTH", prefix), "800");
        let settings = Settings::load_with_env_prefix(&path, &prefix).unwrap();
        assert_eq!(settings.image_width, 800);
        assert_eq!(settings.image_dpi, 20);
        std::env::remove_var(format!("{}_IMAGE_WIDTH", prefix));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_settings_path("malformed");
        fs::write(&path, "image_width = \"wide\"\n").unwrap();
        assert!(Settings::load(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "image_width = \"wide\"\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn projection_from_settings() {
        let mut settings = Settings::default();
        settings.image_width = 640;
        settings.image_dpi = 12;
        settings.side_view_double_sidewall = true;
        let config = settings.projection_config();
        assert_eq!(config.canvas_width, 640);
        assert_eq!(config.canvas_height, 500);
        assert_eq!(config.scale, 12.0);
        assert_eq!(config.stroke_width, 1);
        assert_eq!(config.sidewall_mode, SidewallMode::Doubled);

        let allowances = settings.allowances();
        assert_eq!(allowances.rim_diameter_lip_in, 1.0);
        assert_eq!(allowances.rim_width_additional_in, 1.0);
    }
}
