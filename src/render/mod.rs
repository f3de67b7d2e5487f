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

mod bitmap;
pub mod colour;

pub use bitmap::BitmapSurface;
pub use colour::Colour;

use tracing::debug;
use tyre_geometry::layout::{BoundingBox, FrontLayout, LayoutCoordinates, Point, SideLayout};
use tyre_geometry::TyreGeometry;
use crate::error::FitmentError;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: u32
}

/// Anything the tyre diagrams can be drawn onto
pub trait DrawingSurface {
    /// Closed outline through `points`
    fn polygon(&mut self, points: &[Point], outline: Colour, stroke_width: u32) -> Result<(), FitmentError>;
    fn ellipse(&mut self, bbox: &BoundingBox, outline: Colour, stroke_width: u32) -> Result<(), FitmentError>;
    /// Open path through `points`
    fn line(&mut self, points: &[Point], colour: Colour, stroke_width: u32) -> Result<(), FitmentError>;
    fn text(&mut self, position: Point, text: &str, colour: Colour, font: &FontSpec) -> Result<(), FitmentError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub rim_colour: Colour,
    pub tyre_colour: Colour,
    pub font_colour: Colour,
    pub background_colour: Colour,
    pub font: FontSpec
}

impl RenderStyle {
    pub fn from_settings(settings: &Settings) -> Result<RenderStyle, FitmentError> {
        Ok(RenderStyle {
            rim_colour: parse_colour_setting("outline_rim_color", &settings.outline_rim_color)?,
            tyre_colour: parse_colour_setting("outline_tire_color", &settings.outline_tire_color)?,
            font_colour: parse_colour_setting("font_color", &settings.font_color)?,
            background_colour: parse_colour_setting("background_color", &settings.background_color)?,
            font: FontSpec { family: settings.font.clone(), size: settings.font_size }
        })
    }
}

fn parse_colour_setting(name: &str, value: &str) -> Result<Colour, FitmentError> {
    value.parse().map_err(|e: colour::ColourParseError| {
        FitmentError::InvalidSetting(name.to_string(), e.to_string())
    })
}

/// Draw a projected view of `geometry` along with its size annotation
pub fn draw_layout(surface: &mut impl DrawingSurface,
                   layout: &LayoutCoordinates,
                   geometry: &TyreGeometry,
                   style: &RenderStyle) -> Result<(), FitmentError> {
    debug!("Drawing {} view of {}", layout.view(), geometry.label());
    match layout {
        LayoutCoordinates::Front(front) => draw_front(surface, front, style)?,
        LayoutCoordinates::Side(side) => draw_side(surface, side, style)?
    }
    draw_annotation(surface, layout.label_anchor(), geometry, style)
}

fn draw_front(surface: &mut impl DrawingSurface, layout: &FrontLayout, style: &RenderStyle) -> Result<(), FitmentError> {
    surface.polygon(&layout.rim_box.corners(), style.rim_colour, layout.stroke_width)?;
    surface.polygon(&layout.top_tyre, style.tyre_colour, layout.stroke_width)?;
    surface.polygon(&layout.bottom_tyre, style.tyre_colour, layout.stroke_width)?;
    for lip_line in &layout.rim_lip_lines {
        surface.line(lip_line, style.rim_colour, layout.stroke_width)?;
    }
    Ok(())
}

fn draw_side(surface: &mut impl DrawingSurface, layout: &SideLayout, style: &RenderStyle) -> Result<(), FitmentError> {
    surface.ellipse(&layout.tyre, style.tyre_colour, layout.stroke_width)?;
    surface.ellipse(&layout.rim_lip, style.rim_colour, layout.stroke_width)?;
    surface.ellipse(&layout.rim, style.rim_colour, layout.stroke_width)
}

fn draw_annotation(surface: &mut impl DrawingSurface,
                   anchor: Point,
                   geometry: &TyreGeometry,
                   style: &RenderStyle) -> Result<(), FitmentError> {
    let line_height = style.font.size as f64 * 1.2;
    let lines = [
        geometry.label(),
        format!("diameter {:.1}mm, sidewall {:.1}mm", geometry.overall_diameter_mm(), geometry.sidewall_height_mm())
    ];
    for (idx, line) in lines.iter().enumerate() {
        let position = Point::new(anchor.x, anchor.y + idx as f64 * line_height);
        surface.text(position, line, style.font_colour, &style.font)?;
    }
    Ok(())
}
