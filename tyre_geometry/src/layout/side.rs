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

use crate::geometry::TyreGeometry;
use crate::layout::{BoundingBox, ProjectionConfig, Point};

/// The wheel seen face on as three concentric circles
#[derive(Debug, Clone, PartialEq)]
pub struct SideLayout {
    pub rim: BoundingBox,
    pub rim_lip: BoundingBox,
    pub tyre: BoundingBox,
    pub label_anchor: Point,
    pub stroke_width: u32
}

pub fn project_side(geometry: &TyreGeometry, config: &ProjectionConfig) -> SideLayout {
    let dims = config.pixel_dimensions(geometry);
    let centre = config.canvas_centre();
    let rim_diameter = dims.rim_diameter;
    let lip_diameter = rim_diameter + dims.rim_diameter_lip;
    let tyre_diameter = rim_diameter + 2.0 * dims.sidewall_height * config.sidewall_mode.multiplier();
    SideLayout {
        rim: BoundingBox::centred_on(centre, rim_diameter, rim_diameter),
        rim_lip: BoundingBox::centred_on(centre, lip_diameter, lip_diameter),
        tyre: BoundingBox::centred_on(centre, tyre_diameter, tyre_diameter),
        label_anchor: config.label_anchor(),
        stroke_width: config.stroke_width
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::derive_geometry;
    use crate::layout::{Point, ProjectionConfig, SidewallMode};
    use crate::layout::side::project_side;
    use crate::spec::{RimAllowances, TyreSpec};

    #[test]
    fn concentric_circles() {
        let config = ProjectionConfig::default();
        let tyre = derive_geometry(&TyreSpec::new(17.0, 7.5, 205.0, 45.0, RimAllowances::default()));
        let layout = project_side(&tyre, &config);
        let centre = Point::new(250.0, 250.0);
        for bbox in [layout.rim, layout.rim_lip, layout.tyre] {
            assert!((bbox.centre().x - centre.x).abs() < 1e-9);
            assert!((bbox.centre().y - centre.y).abs() < 1e-9);
            assert_eq!(bbox.width(), bbox.height());
        }
        assert_eq!(layout.rim.width(), 272.0);
        assert_eq!(layout.rim_lip.width(), 288.0);
        let sidewall_px = tyre.sidewall_height_in() * config.scale;
        assert!((layout.tyre.width() - (272.0 + 2.0 * sidewall_px)).abs() < 1e-9);
    }

    #[test]
    fn tyre_diameter_matches_overall_diameter() {
        let config = ProjectionConfig::default();
        let tyre = derive_geometry(&TyreSpec::new(18.0, 8.0, 225.0, 40.0, RimAllowances::default()));
        let layout = project_side(&tyre, &config);
        let expected_px = tyre.overall_diameter_mm() / 25.4 * config.scale;
        assert!((layout.tyre.width() - expected_px).abs() < 1e-9);
    }

    #[test]
    fn doubled_sidewall_mode() {
        let unified = ProjectionConfig::default();
        let doubled = ProjectionConfig { sidewall_mode: SidewallMode::Doubled, ..unified };
        let tyre = derive_geometry(&TyreSpec::new(17.0, 7.5, 205.0, 45.0, RimAllowances::default()));
        let sidewall_px = tyre.sidewall_height_in() * unified.scale;
        let unified_layout = project_side(&tyre, &unified);
        let doubled_layout = project_side(&tyre, &doubled);
        assert!((doubled_layout.tyre.width() - (272.0 + 4.0 * sidewall_px)).abs() < 1e-9);
        assert!((doubled_layout.tyre.width() - unified_layout.tyre.width() - 2.0 * sidewall_px).abs() < 1e-9);
        assert_eq!(doubled_layout.rim, unified_layout.rim);
        assert_eq!(doubled_layout.rim_lip, unified_layout.rim_lip);
    }

    #[test]
    fn projection_is_idempotent() {
        let config = ProjectionConfig { canvas_width: 800, canvas_height: 600, scale: 20.0, ..ProjectionConfig::default() };
        let tyre = derive_geometry(&TyreSpec::new(19.0, 9.0, 255.0, 35.0, RimAllowances::default()));
        assert_eq!(project_side(&tyre, &config), project_side(&tyre, &config));
    }
}
