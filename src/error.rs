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

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum FitmentError {
    #[error("io error. `{0}`")]
    IoError(#[from] io::Error),
    #[error("tyre geometry error. `{0}`")]
    GeometryError(#[from] tyre_geometry::Error),
    #[error("settings error. `{0}`")]
    SettingsError(#[from] config::ConfigError),
    #[error("json encoding error. `{0}`")]
    JsonError(#[from] serde_json::Error),
    #[error("image encoding error. `{0}`")]
    ImageError(#[from] image::ImageError),
    #[error("drawing failed. `{0}`")]
    DrawingError(String),
    #[error("invalid setting `{0}`. `{1}`")]
    InvalidSetting(String, String),
    #[error("no fitments given on the command line or in `{0}`")]
    NoFitments(String)
}
