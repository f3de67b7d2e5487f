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

pub const MM_PER_INCH: f64 = 25.4;

pub fn inch_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inch(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use crate::units::{inch_to_mm, mm_to_inch};

    #[test]
    fn inch_mm_conversions() {
        assert_eq!(inch_to_mm(1.0), 25.4);
        assert_eq!(inch_to_mm(17.0), 431.79999999999995);
        assert_eq!(mm_to_inch(25.4), 1.0);
        assert_eq!(mm_to_inch(0.0), 0.0);
        assert!((mm_to_inch(inch_to_mm(7.5)) - 7.5).abs() < 1e-12);
    }
}
