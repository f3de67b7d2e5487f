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

//! Turns tyre dimensions into pixel coordinates for the two schematic views.
//!
//! Everything here is a pure function of a [`TyreGeometry`] and a
//! [`ProjectionConfig`]; nothing is cached between calls.

mod front;
mod side;

pub use front::{FrontLayout, project_front};
pub use side::{SideLayout, project_side};

use std::fmt::{Display, Formatter};
use crate::geometry::TyreGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Reflect across the horizontal line `y = axis_y`
    pub fn mirror_y(&self, axis_y: f64) -> Point {
        Point { x: self.x, y: axis_y * 2.0 - self.y }
    }
}

/// Axis aligned box given by its top-left and bottom-right corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: Point,
    pub bottom_right: Point
}

impl BoundingBox {
    pub fn centred_on(centre: Point, width: f64, height: f64) -> BoundingBox {
        BoundingBox {
            top_left: Point::new(centre.x - width / 2.0, centre.y - height / 2.0),
            bottom_right: Point::new(centre.x + width / 2.0, centre.y + height / 2.0)
        }
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn centre(&self) -> Point {
        Point::new((self.top_left.x + self.bottom_right.x) / 2.0,
                   (self.top_left.y + self.bottom_right.y) / 2.0)
    }

    /// Corners in clockwise order starting from the top left
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left,
         Point::new(self.bottom_right.x, self.top_left.y),
         self.bottom_right,
         Point::new(self.top_left.x, self.bottom_right.y)]
    }
}

/// How the side view sizes the tyre around the rim
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum SidewallMode {
    /// The tyre adds one sidewall height on each side of the rim, same as the front view
    #[default]
    Unified,
    /// Each sidewall is drawn twice as tall, matching images from older releases
    Doubled
}

impl SidewallMode {
    pub fn multiplier(&self) -> f64 {
        match self {
            SidewallMode::Unified => 1.0,
            SidewallMode::Doubled => 2.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Pixels per inch
    pub scale: f64,
    /// Outline width in pixels
    pub stroke_width: u32,
    /// Distance of the label from the top left corner of the canvas
    pub label_margin_px: f64,
    pub sidewall_mode: SidewallMode
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            canvas_width: 500,
            canvas_height: 500,
            scale: 16.0,
            stroke_width: 1,
            label_margin_px: 10.0,
            sidewall_mode: SidewallMode::Unified
        }
    }
}

impl ProjectionConfig {
    pub fn canvas_centre(&self) -> Point {
        Point::new(self.canvas_width as f64 / 2.0, self.canvas_height as f64 / 2.0)
    }

    pub fn label_anchor(&self) -> Point {
        Point::new(self.label_margin_px, self.label_margin_px)
    }

    pub fn to_px(&self, inches: f64) -> f64 {
        inches * self.scale
    }

    pub fn pixel_dimensions(&self, geometry: &TyreGeometry) -> PixelDimensions {
        PixelDimensions {
            rim_diameter: self.to_px(geometry.rim_diameter_in()),
            rim_width: self.to_px(geometry.seated_width_in()),
            rim_diameter_lip: self.to_px(geometry.rim_diameter_lip_in()),
            tread_width: self.to_px(geometry.section_width_in()),
            sidewall_height: self.to_px(geometry.sidewall_height_in())
        }
    }
}

/// Tyre dimensions scaled into pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDimensions {
    pub rim_diameter: f64,
    /// Rim width including the bead seating allowance
    pub rim_width: f64,
    pub rim_diameter_lip: f64,
    pub tread_width: f64,
    pub sidewall_height: f64
}

impl Display for PixelDimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "rim diameter {:.1}px, rim width {:.1}px, lip {:.1}px, tread width {:.1}px, sidewall {:.1}px",
               self.rim_diameter, self.rim_width, self.rim_diameter_lip, self.tread_width, self.sidewall_height)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum View {
    Front,
    Side
}

impl View {
    pub const ALL: [View; 2] = [View::Front, View::Side];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Front => "front",
            View::Side => "side"
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCoordinates {
    Front(FrontLayout),
    Side(SideLayout)
}

impl LayoutCoordinates {
    pub fn view(&self) -> View {
        match self {
            LayoutCoordinates::Front(_) => View::Front,
            LayoutCoordinates::Side(_) => View::Side
        }
    }

    pub fn label_anchor(&self) -> Point {
        match self {
            LayoutCoordinates::Front(layout) => layout.label_anchor,
            LayoutCoordinates::Side(layout) => layout.label_anchor
        }
    }

    /// Outline width in pixels for every shape in the view
    pub fn stroke_width(&self) -> u32 {
        match self {
            LayoutCoordinates::Front(layout) => layout.stroke_width,
            LayoutCoordinates::Side(layout) => layout.stroke_width
        }
    }
}

pub fn project(view: View, geometry: &TyreGeometry, config: &ProjectionConfig) -> LayoutCoordinates {
    match view {
        View::Front => LayoutCoordinates::Front(project_front(geometry, config)),
        View::Side => LayoutCoordinates::Side(project_side(geometry, config))
    }
}
