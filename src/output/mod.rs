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
use tracing::info;
use tyre_geometry::layout::View;
use tyre_geometry::{ComparisonRow, TyreSpec};
use utils::filesystem::{ensure_dir, safe_file_path_in};
use crate::error::FitmentError;

pub const COMPARISON_FILENAME: &str = "comparison";

/// Where the artifacts of a run get written
pub struct OutputFolder {
    path: PathBuf
}

impl OutputFolder {
    pub fn create(path: &Path) -> Result<OutputFolder, FitmentError> {
        ensure_dir(path)?;
        info!("Writing output to {}", path.display());
        Ok(OutputFolder { path: path.to_path_buf() })
    }

    /// e.g. `front_17x7.5_205_45R17.png`
    pub fn image_path(&self, view: View, spec: &TyreSpec) -> PathBuf {
        safe_file_path_in(&self.path, &format!("{}_{}", view.as_str(), spec.artifact_name()), "png")
    }

    /// Overwritten on every run
    pub fn latest_image_path(&self, view: View) -> PathBuf {
        safe_file_path_in(&self.path, &format!("{}_latest", view.as_str()), "png")
    }

    pub fn comparison_path(&self) -> PathBuf {
        safe_file_path_in(&self.path, COMPARISON_FILENAME, "json")
    }

    pub fn write_comparison(&self, rows: &[ComparisonRow]) -> Result<PathBuf, FitmentError> {
        let path = self.comparison_path();
        fs::write(&path, serde_json::to_string_pretty(rows)?)?;
        info!("Saved comparison of {} tyre(s) to {}", rows.len(), path.display());
        Ok(path)
    }
}
