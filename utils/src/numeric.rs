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

/// Round to `decimal_places` using `f64::round`, so halves round away from zero.
pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// Percentages used as a ratio of something must be above zero and no more than 100
pub fn is_valid_ratio_percentage(val: f64) -> bool {
    val.is_finite() && val > 0.0 && val <= 100.0
}

pub fn is_positive_finite(val: f64) -> bool {
    val.is_finite() && val > 0.0
}

#[cfg(test)]
mod tests {
    use crate::numeric::{is_positive_finite, is_valid_ratio_percentage, round_float_to};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(611.5220242337847, 2), 611.52);
        assert_eq!(round_float_to(1921.153098841344, 2), 1921.15);
        assert_eq!(round_float_to(-3.2671, 2), -3.27);
        assert_eq!(round_float_to(0.125, 2), 0.13);
        assert_eq!(round_float_to(-0.125, 2), -0.13);
        assert_eq!(round_float_to(48.365, 0), 48.0);
    }

    #[test]
    fn valid_ratio_percentage_tests() {
        assert_eq!(is_valid_ratio_percentage(-1.0), false);
        assert_eq!(is_valid_ratio_percentage(0.0), false);
        assert_eq!(is_valid_ratio_percentage(0.5), true);
        assert_eq!(is_valid_ratio_percentage(45.0), true);
        assert_eq!(is_valid_ratio_percentage(100.0), true);
        assert_eq!(is_valid_ratio_percentage(100.1), false);
        assert_eq!(is_valid_ratio_percentage(f64::NAN), false);
    }

    #[test]
    fn positive_finite_tests() {
        assert_eq!(is_positive_finite(7.5), true);
        assert_eq!(is_positive_finite(0.0), false);
        assert_eq!(is_positive_finite(-2.0), false);
        assert_eq!(is_positive_finite(f64::INFINITY), false);
    }
}
