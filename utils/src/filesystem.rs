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

use std::{fs, io};
use std::path::{Path, PathBuf};

/// Takes a name and turns it into a filename that is safe to use on any filesystem.
/// Characters that would be illegal in a path are stripped and any spaces are
/// replaced with underscores. Unlike a unique filename the result is stable so
/// writing to it twice overwrites the earlier file.
pub fn safe_filename(name: &str, extension: &str) -> String {
    let sanitized_name = sanitize_filename::sanitize(name).replace(" ", "_");
    format!("{}.{}", sanitized_name, extension)
}

pub fn safe_file_path_in(path: &Path, name: &str, extension: &str) -> PathBuf {
    path.join(safe_filename(name, extension))
}

/// Create `path` (and any missing parents) if it isn't already a directory
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
}
