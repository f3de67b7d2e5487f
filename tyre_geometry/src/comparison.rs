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
use tracing::info;
use utils::numeric::round_float_to;
use crate::error::{Error, ErrorKind, Result};
use crate::geometry::{PI, TyreGeometry};

const DECIMAL_PLACES: u32 = 2;

/// One line of a fitment comparison, relative to the first (baseline) tyre.
///
/// `speedometer_delta_pct` is the error of a speedometer calibrated for the
/// baseline tyre; a bigger tyre rolls further per turn so the gauge reads slow
/// and the delta is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "tire")]
    pub label: String,
    pub diameter_mm: f64,
    pub circumference_mm: f64,
    #[serde(rename = "speedometer_difference_percent")]
    pub speedometer_delta_pct: f64,
    #[serde(rename = "reading_50kmh")]
    pub reading_50: f64,
    #[serde(rename = "reading_100kmh")]
    pub reading_100: f64,
    #[serde(rename = "ride_height_difference_mm")]
    pub ride_height_delta_mm: f64
}

impl ComparisonRow {
    fn baseline(label: String, diameter_mm: f64, circumference_mm: f64) -> ComparisonRow {
        ComparisonRow {
            label,
            diameter_mm,
            circumference_mm,
            speedometer_delta_pct: 0.0,
            reading_50: 50.0,
            reading_100: 100.0,
            ride_height_delta_mm: 0.0
        }
    }

    #[cfg(test)]
    pub(crate) fn is_baseline_identity(&self) -> bool {
        self.speedometer_delta_pct == 0.0 &&
            self.reading_50 == 50.0 &&
            self.reading_100 == 100.0 &&
            self.ride_height_delta_mm == 0.0
    }
}

/// Compare every tyre in `tyres` against the first one.
///
/// Rows come back in the same order as the input with the baseline first.
pub fn compare_tyres(tyres: &[TyreGeometry]) -> Result<Vec<ComparisonRow>> {
    let baseline = tyres.first().ok_or_else(|| {
        Error::new(ErrorKind::InvalidComparisonInput, "no tyres to compare".to_string())
    })?;
    if let Some((idx, tyre)) = tyres.iter().enumerate().find(|(_, tyre)| !tyre.is_valid()) {
        return Err(Error::new(ErrorKind::InvalidComparisonInput,
                              format!("tyre {} ({}) has invalid dimensions", idx, tyre.label())));
    }

    let (baseline_diameter_mm, baseline_circumference_mm) = rolling_dimensions(baseline);
    // every delta is relative to this
    if baseline_circumference_mm <= 0.0 {
        return Err(Error::new(ErrorKind::InvalidComparisonInput,
                              format!("baseline {} has no rolling circumference", baseline.label())));
    }
    info!("Comparing {} tyre(s) against baseline {}", tyres.len(), baseline.label());

    let mut rows = Vec::with_capacity(tyres.len());
    rows.push(ComparisonRow::baseline(baseline.label(), baseline_diameter_mm, baseline_circumference_mm));
    for tyre in &tyres[1..] {
        let (diameter_mm, circumference_mm) = rolling_dimensions(tyre);
        let circumference_change = (circumference_mm - baseline_circumference_mm) / baseline_circumference_mm;
        let speedometer_delta_pct = speedometer_delta(circumference_change);
        rows.push(ComparisonRow {
            label: tyre.label(),
            diameter_mm,
            circumference_mm,
            speedometer_delta_pct,
            reading_50: gauge_reading(50.0, speedometer_delta_pct),
            reading_100: gauge_reading(100.0, speedometer_delta_pct),
            ride_height_delta_mm: (diameter_mm - baseline_diameter_mm) / 2.0
        });
    }
    Ok(rows)
}

fn rolling_dimensions(tyre: &TyreGeometry) -> (f64, f64) {
    let diameter_mm = round_float_to(tyre.rim_diameter_mm() + 2.0 * tyre.sidewall_height_mm(), DECIMAL_PLACES);
    let circumference_mm = round_float_to(diameter_mm * PI, DECIMAL_PLACES);
    (diameter_mm, circumference_mm)
}

/// A longer circumference means the gauge under-reads, hence the sign flip.
fn speedometer_delta(circumference_change: f64) -> f64 {
    let delta = round_float_to(circumference_change * 100.0, DECIMAL_PLACES);
    if delta == 0.0 {
        // avoid reporting -0
        return 0.0;
    }
    -delta
}

fn gauge_reading(true_speed: f64, speedometer_delta_pct: f64) -> f64 {
    round_float_to(true_speed * (1.0 + speedometer_delta_pct / 100.0), DECIMAL_PLACES)
}
