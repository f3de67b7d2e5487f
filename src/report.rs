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

use itertools::Itertools;
use tyre_geometry::ComparisonRow;

const HEADINGS: [&str; 7] = ["Tyre", "Diameter mm", "Circumference mm", "Speedo %", "At 50", "At 100", "Ride height mm"];

/// Plain text table of a comparison with the baseline on the first row
pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let cells: Vec<[String; 7]> = rows.iter().map(|row| [
        row.label.clone(),
        format!("{:.2}", row.diameter_mm),
        format!("{:.2}", row.circumference_mm),
        format!("{:+.2}", row.speedometer_delta_pct),
        format!("{:.2}", row.reading_50),
        format!("{:.2}", row.reading_100),
        format!("{:+.2}", row.ride_height_delta_mm)
    ]).collect();

    let widths: Vec<usize> = (0..HEADINGS.len()).map(|col| {
        cells.iter().map(|row| row[col].len()).chain([HEADINGS[col].len()]).max().unwrap_or(0)
    }).collect();

    let format_line = |values: &[&str]| -> String {
        values.iter().zip(&widths).enumerate().map(|(col, (value, width))| {
            match col {
                0 => format!("{:<width$}", value, width = width),
                _ => format!("{:>width$}", value, width = width)
            }
        }).join("  ").trim_end().to_string()
    };

    let mut lines = vec![format_line(&HEADINGS)];
    lines.push(widths.iter().map(|width| "-".repeat(*width)).join("  "));
    for row in &cells {
        lines.push(format_line(&row.iter().map(|s| s.as_str()).collect::<Vec<&str>>()));
    }
    lines.join("\n")
}
