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

//! Tyre and wheel geometry: derive physical dimensions from tyre-size notation,
//! compare fitments against a baseline and lay them out for drawing.

pub mod error;
pub mod spec;
pub mod geometry;
pub mod comparison;
pub mod layout;

pub use error::{Error, ErrorKind, Result};
pub use spec::{RimAllowances, TyreSpec};
pub use geometry::{derive_geometry, TyreGeometry};
pub use comparison::{compare_tyres, ComparisonRow};
