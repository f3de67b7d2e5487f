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

use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::units::{inch_to_mm, mm_to_inch};
use crate::spec::TyreSpec;

/// Fixed value of pi used for every circumference so reports stay reproducible
pub const PI: f64 = 3.14159265359;

/// Physical dimensions of a tyre and rim assembly derived from a [`TyreSpec`].
///
/// Values are computed once by [`derive_geometry`] and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TyreGeometry {
    spec: TyreSpec,
    rim_diameter_mm: f64,
    rim_width_mm: f64,
    section_width_in: f64,
    seated_width_in: f64,
    sidewall_height_in: f64,
    overall_diameter_mm: f64,
    circumference_mm: f64
}

/// Work out the dimensions of the tyre described by `spec`.
///
/// The sidewall height treats the tyre's cross-section as a trapezoid; the tread
/// is `section_width` wide while the bead is only as wide as the seated rim. The
/// height is the tread width squared times the aspect ratio, divided by the mean
/// of the two widths, rather than the straight `width * aspect_ratio`.
pub fn derive_geometry(spec: &TyreSpec) -> TyreGeometry {
    let rim_diameter_mm = inch_to_mm(spec.rim_diameter_in);
    let rim_width_mm = inch_to_mm(spec.rim_width_in);
    let section_width_in = mm_to_inch(spec.section_width_mm);
    let seated_width_in = spec.rim_width_in + spec.rim_width_additional_in;
    let sidewall_height_in = sidewall_height(section_width_in, seated_width_in, spec.aspect_ratio_pct);
    let overall_diameter_mm = rim_diameter_mm + 2.0 * inch_to_mm(sidewall_height_in);
    let circumference_mm = overall_diameter_mm * PI;
    debug!("Derived {}: sidewall {}in, diameter {}mm", spec, sidewall_height_in, overall_diameter_mm);
    TyreGeometry {
        spec: *spec,
        rim_diameter_mm,
        rim_width_mm,
        section_width_in,
        seated_width_in,
        sidewall_height_in,
        overall_diameter_mm,
        circumference_mm
    }
}

fn sidewall_height(tread_width_in: f64, bead_width_in: f64, aspect_ratio_pct: f64) -> f64 {
    let mean_width = (tread_width_in + bead_width_in) / 2.0;
    if mean_width == 0.0 {
        return 0.0;
    }
    (tread_width_in * tread_width_in * (aspect_ratio_pct / 100.0)) / mean_width
}

impl From<&TyreSpec> for TyreGeometry {
    fn from(spec: &TyreSpec) -> Self {
        derive_geometry(spec)
    }
}

impl TyreGeometry {
    pub fn spec(&self) -> &TyreSpec {
        &self.spec
    }

    pub fn label(&self) -> String {
        self.spec.label()
    }

    pub fn rim_diameter_in(&self) -> f64 {
        self.spec.rim_diameter_in
    }

    pub fn rim_diameter_mm(&self) -> f64 {
        self.rim_diameter_mm
    }

    pub fn rim_width_mm(&self) -> f64 {
        self.rim_width_mm
    }

    pub fn rim_diameter_lip_in(&self) -> f64 {
        self.spec.rim_diameter_lip_in
    }

    /// Width across the tread
    pub fn section_width_in(&self) -> f64 {
        self.section_width_in
    }

    /// Width across the bead where it sits on the rim
    pub fn seated_width_in(&self) -> f64 {
        self.seated_width_in
    }

    pub fn sidewall_height_in(&self) -> f64 {
        self.sidewall_height_in
    }

    pub fn sidewall_height_mm(&self) -> f64 {
        inch_to_mm(self.sidewall_height_in)
    }

    pub fn overall_diameter_mm(&self) -> f64 {
        self.overall_diameter_mm
    }

    pub fn circumference_mm(&self) -> f64 {
        self.circumference_mm
    }

    /// Every dimension is a finite, non-negative number and the tyre actually
    /// rolls, i.e. it has a rim and a circumference
    pub fn is_valid(&self) -> bool {
        let non_negative = [self.rim_diameter_mm,
                            self.rim_width_mm,
                            self.section_width_in,
                            self.seated_width_in,
                            self.sidewall_height_in,
                            self.overall_diameter_mm,
                            self.circumference_mm].iter().all(|val| val.is_finite() && *val >= 0.0);
        non_negative &&
            self.rim_diameter_mm > 0.0 &&
            self.overall_diameter_mm > 0.0 &&
            self.circumference_mm > 0.0
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{derive_geometry, TyreGeometry};
    use crate::spec::{RimAllowances, TyreSpec};

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn worked_example() {
        let spec = TyreSpec::new(17.0, 7.5, 205.0, 45.0, RimAllowances::default());
        let geometry = derive_geometry(&spec);
        assert!(close(geometry.section_width_in(), 8.070866, 1e-6));
        assert_eq!(geometry.seated_width_in(), 8.5);
        assert!(close(geometry.sidewall_height_in(), 3.537835, 1e-6));
        assert!(close(geometry.rim_diameter_mm(), 431.8, 1e-9));
        assert!(close(geometry.rim_width_mm(), 190.5, 1e-9));
        assert!(close(geometry.overall_diameter_mm(), 611.522024, 1e-6));
        assert!(close(geometry.circumference_mm(), 1921.153099, 1e-6));
    }

    #[test]
    fn uses_trapezoid_sidewall_not_textbook_formula() {
        let spec = TyreSpec::new(17.0, 7.5, 205.0, 45.0, RimAllowances::default());
        let geometry = derive_geometry(&spec);
        let textbook = geometry.section_width_in() * 0.45;
        assert!(!close(geometry.sidewall_height_in(), textbook, 1e-3));

        // A bead as wide as the tread makes the two agree
        let matched = TyreSpec::new(17.0, 205.0 / 25.4, 205.0, 45.0,
                                    RimAllowances { rim_diameter_lip_in: 1.0, rim_width_additional_in: 0.0 });
        let matched_geometry = derive_geometry(&matched);
        assert!(close(matched_geometry.sidewall_height_in(), matched_geometry.section_width_in() * 0.45, 1e-9));
    }

    #[test]
    fn sidewall_positive_for_positive_inputs() {
        for section_width in [125.0, 205.0, 335.0] {
            for aspect_ratio in [1.0, 25.0, 45.0, 80.0, 100.0] {
                for rim_width in [4.0, 7.5, 12.0] {
                    let spec = TyreSpec::new(17.0, rim_width, section_width, aspect_ratio, RimAllowances::default());
                    let geometry = derive_geometry(&spec);
                    assert!(geometry.sidewall_height_in() > 0.0);
                    assert!(geometry.overall_diameter_mm() > geometry.rim_diameter_mm());
                    assert!(geometry.is_valid());
                }
            }
        }
    }

    #[test]
    fn zero_width_guard() {
        let spec = TyreSpec::new(17.0, 0.0, 0.0, 45.0,
                                 RimAllowances { rim_diameter_lip_in: 0.0, rim_width_additional_in: 0.0 });
        let geometry = derive_geometry(&spec);
        assert_eq!(geometry.sidewall_height_in(), 0.0);
        assert!(close(geometry.overall_diameter_mm(), geometry.rim_diameter_mm(), 1e-12));
        assert!(geometry.is_valid());
    }

    #[test]
    fn negative_dimensions_are_invalid() {
        let spec = TyreSpec::new(-17.0, 7.5, 205.0, 45.0, RimAllowances::default());
        assert!(!derive_geometry(&spec).is_valid());
    }

    #[test]
    fn zero_rim_is_invalid() {
        let spec = TyreSpec::new(0.0, 0.0, 0.0, 45.0,
                                 RimAllowances { rim_diameter_lip_in: 0.0, rim_width_additional_in: 0.0 });
        let geometry = derive_geometry(&spec);
        assert_eq!(geometry.circumference_mm(), 0.0);
        assert!(!geometry.is_valid());
    }

    #[test]
    fn from_spec_matches_derive() {
        let spec = TyreSpec::new(18.0, 8.0, 225.0, 40.0, RimAllowances::default());
        assert_eq!(TyreGeometry::from(&spec), derive_geometry(&spec));
        assert_eq!(derive_geometry(&spec).label(), "18x8 225/40R18");
    }
}
