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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use utils::numeric::{is_positive_finite, is_valid_ratio_percentage};
use crate::error::{Error, ErrorKind, Result};

/// Nominal description of a tyre mounted on a rim, as written on the sidewall
/// and wheel spec sheet, plus the allowances used when drawing it.
///
/// Constructing one directly does no validation; degenerate sizes are handled
/// when the geometry is derived. Use [`TyreSpec::validated`] or
/// [`TyreSpec::from_fitment_str`] for user supplied values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TyreSpec {
    pub rim_diameter_in: f64,
    pub rim_width_in: f64,
    pub section_width_mm: f64,
    pub aspect_ratio_pct: f64,
    /// How far the rim flange sticks out past the nominal rim diameter
    pub rim_diameter_lip_in: f64,
    /// Added to the rim width to get the width of the tyre bead once seated
    pub rim_width_additional_in: f64
}

/// The lip and seating allowances applied to every fitment in a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RimAllowances {
    pub rim_diameter_lip_in: f64,
    pub rim_width_additional_in: f64
}

impl Default for RimAllowances {
    fn default() -> Self {
        RimAllowances { rim_diameter_lip_in: 1.0, rim_width_additional_in: 1.0 }
    }
}

impl TyreSpec {
    pub fn new(rim_diameter_in: f64,
               rim_width_in: f64,
               section_width_mm: f64,
               aspect_ratio_pct: f64,
               allowances: RimAllowances) -> TyreSpec {
        TyreSpec {
            rim_diameter_in,
            rim_width_in,
            section_width_mm,
            aspect_ratio_pct,
            rim_diameter_lip_in: allowances.rim_diameter_lip_in,
            rim_width_additional_in: allowances.rim_width_additional_in
        }
    }

    pub fn validated(rim_diameter_in: f64,
                     rim_width_in: f64,
                     section_width_mm: f64,
                     aspect_ratio_pct: f64,
                     allowances: RimAllowances) -> Result<TyreSpec> {
        let spec = TyreSpec::new(rim_diameter_in, rim_width_in, section_width_mm, aspect_ratio_pct, allowances);
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, val) in [("rim diameter", self.rim_diameter_in),
                            ("rim width", self.rim_width_in),
                            ("section width", self.section_width_mm)] {
            if !is_positive_finite(val) {
                return Err(Error::new(ErrorKind::InvalidSpec,
                                      format!("{} must be a positive number, got {}", name, val)));
            }
        }
        if !is_valid_ratio_percentage(self.aspect_ratio_pct) {
            return Err(Error::new(ErrorKind::InvalidSpec,
                                  format!("aspect ratio must be in (0, 100], got {}", self.aspect_ratio_pct)));
        }
        for (name, val) in [("rim lip allowance", self.rim_diameter_lip_in),
                            ("rim width allowance", self.rim_width_additional_in)] {
            if !val.is_finite() || val < 0.0 {
                return Err(Error::new(ErrorKind::InvalidSpec,
                                      format!("{} must not be negative, got {}", name, val)));
            }
        }
        Ok(())
    }

    /// Parse a fitment such as `17x7.5 205/45R17` or `17x7.5-205/45ZR17`.
    ///
    /// The rim half comes first as `<diameter>x<width>` in inches, followed by the
    /// tyre in the usual `<section width mm>/<aspect ratio>R<diameter>` notation.
    /// The tyre's diameter has to match the rim it is mounted on.
    pub fn from_fitment_str(fitment: &str, allowances: RimAllowances) -> Result<TyreSpec> {
        let parts: Vec<&str> = fitment
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(invalid_fitment(fitment, "expected '<rim>x<width> <section>/<aspect>R<diameter>'"));
        }
        let (rim_diameter_in, rim_width_in) = parse_rim(parts[0])
            .ok_or_else(|| invalid_fitment(fitment, "couldn't parse rim size"))?;
        let (section_width_mm, aspect_ratio_pct, tyre_diameter_in) = parse_tyre(parts[1])
            .ok_or_else(|| invalid_fitment(fitment, "couldn't parse tyre size"))?;
        if tyre_diameter_in != rim_diameter_in {
            return Err(invalid_fitment(
                fitment,
                &format!("R{} tyre doesn't fit a {} inch rim", tyre_diameter_in, rim_diameter_in)
            ));
        }
        TyreSpec::validated(rim_diameter_in, rim_width_in, section_width_mm, aspect_ratio_pct, allowances)
    }

    pub fn rim_size(&self) -> String {
        format!("{}x{}", self.rim_diameter_in, self.rim_width_in)
    }

    pub fn tyre_size(&self) -> String {
        format!("{}/{}R{}", self.section_width_mm, self.aspect_ratio_pct, self.rim_diameter_in)
    }

    /// Human readable name used in reports, e.g. `17x7.5 205/45R17`
    pub fn label(&self) -> String {
        format!("{} {}", self.rim_size(), self.tyre_size())
    }

    /// Filesystem friendly name, e.g. `17x7.5_205_45R17`
    pub fn artifact_name(&self) -> String {
        format!("{}_{}_{}R{}",
                self.rim_size(),
                self.section_width_mm,
                self.aspect_ratio_pct,
                self.rim_diameter_in)
    }
}

impl Display for TyreSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn invalid_fitment(fitment: &str, reason: &str) -> Error {
    Error::new(ErrorKind::InvalidSpec, format!("'{}': {}", fitment, reason))
}

fn parse_rim(rim: &str) -> Option<(f64, f64)> {
    let (diameter, width) = rim.split_once(|c: char| c == 'x' || c == 'X')?;
    Some((diameter.trim().parse().ok()?, width.trim().parse().ok()?))
}

fn parse_tyre(tyre: &str) -> Option<(f64, f64, f64)> {
    let (section_width, rest) = tyre.split_once('/')?;
    let rest = rest.to_ascii_uppercase();
    let (aspect_ratio, diameter) = rest.split_once('R')?;
    let aspect_ratio = aspect_ratio.strip_suffix('Z').unwrap_or(aspect_ratio);
    Some((section_width.trim().parse().ok()?,
          aspect_ratio.trim().parse().ok()?,
          diameter.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::spec::{RimAllowances, TyreSpec};

    #[test]
    fn parse_fitment() {
        let spec = TyreSpec::from_fitment_str("17x7.5 205/45R17", RimAllowances::default()).unwrap();
        assert_eq!(spec.rim_diameter_in, 17.0);
        assert_eq!(spec.rim_width_in, 7.5);
        assert_eq!(spec.section_width_mm, 205.0);
        assert_eq!(spec.aspect_ratio_pct, 45.0);
        assert_eq!(spec.rim_diameter_lip_in, 1.0);
        assert_eq!(spec.rim_width_additional_in, 1.0);
    }

    #[test]
    fn parse_fitment_separators() {
        let allowances = RimAllowances { rim_diameter_lip_in: 0.5, rim_width_additional_in: 0.75 };
        let dashed = TyreSpec::from_fitment_str("18X8-225/40zr18", allowances).unwrap();
        let spaced = TyreSpec::from_fitment_str("  18x8   225/40ZR18 ", allowances).unwrap();
        assert_eq!(dashed, spaced);
        assert_eq!(dashed.rim_diameter_lip_in, 0.5);
        assert_eq!(dashed.rim_width_additional_in, 0.75);
        assert_eq!(dashed.aspect_ratio_pct, 40.0);
    }

    #[test]
    fn parse_fitment_errors() {
        let allowances = RimAllowances::default();
        for bad in ["", "17x7.5", "17x7.5 205/45R18", "17 205/45R17", "17x7.5 205-45R17",
                    "17x7.5 205/0R17", "17x7.5 205/120R17", "17x0 205/45R17", "axb 205/45R17"] {
            let err = TyreSpec::from_fitment_str(bad, allowances).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSpec, "{}", bad);
        }
    }

    #[test]
    fn validate_rejects_negative_allowances() {
        let allowances = RimAllowances { rim_diameter_lip_in: -1.0, rim_width_additional_in: 1.0 };
        assert!(TyreSpec::validated(17.0, 7.5, 205.0, 45.0, allowances).is_err());
        assert!(TyreSpec::validated(17.0, 7.5, 205.0, 45.0, RimAllowances::default()).is_ok());
    }

    #[test]
    fn labels() {
        let spec = TyreSpec::new(17.0, 7.5, 205.0, 45.0, RimAllowances::default());
        assert_eq!(spec.label(), "17x7.5 205/45R17");
        assert_eq!(spec.to_string(), "17x7.5 205/45R17");
        assert_eq!(spec.artifact_name(), "17x7.5_205_45R17");
    }
}
