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
use crate::layout::{BoundingBox, Point, ProjectionConfig};

/// The tyre seen from the front with the rim as a box in the middle and the
/// sidewalls drawn as trapezoids above and below it.
///
/// Each trapezoid's narrow edge sits on the rim (the bead) and its wide edge is
/// the tread, centred over the bead.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontLayout {
    pub rim_box: BoundingBox,
    /// Tread left, tread right, bead right, bead left
    pub top_tyre: [Point; 4],
    /// `top_tyre` mirrored across the rim's centre line, same point order
    pub bottom_tyre: [Point; 4],
    /// Left and right lip segments, empty if there's no lip allowance
    pub rim_lip_lines: Vec<[Point; 2]>,
    pub label_anchor: Point,
    pub stroke_width: u32
}

pub fn project_front(geometry: &TyreGeometry, config: &ProjectionConfig) -> FrontLayout {
    let dims = config.pixel_dimensions(geometry);
    let centre = config.canvas_centre();
    let rim_box = BoundingBox::centred_on(centre, dims.rim_width, dims.rim_diameter);
    let left = rim_box.top_left.x;
    let right = rim_box.bottom_right.x;
    let top = rim_box.top_left.y;
    let bottom = rim_box.bottom_right.y;

    let tread_overhang = (dims.tread_width - dims.rim_width) / 2.0;
    let tread_y = top - dims.sidewall_height;
    let top_tyre = [
        Point::new(left - tread_overhang, tread_y),
        Point::new(right + tread_overhang, tread_y),
        Point::new(right, top),
        Point::new(left, top)
    ];
    let bottom_tyre = top_tyre.map(|p| p.mirror_y(centre.y));

    let mut rim_lip_lines = Vec::new();
    if dims.rim_diameter_lip > 0.0 {
        let lip = dims.rim_diameter_lip / 2.0;
        for x in [left, right] {
            rim_lip_lines.push([Point::new(x, top - lip), Point::new(x, bottom + lip)]);
        }
    }

    FrontLayout {
        rim_box,
        top_tyre,
        bottom_tyre,
        rim_lip_lines,
        label_anchor: config.label_anchor(),
        stroke_width: config.stroke_width
    }
}
