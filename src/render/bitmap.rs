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

use std::f64::consts::TAU;
use std::path::Path;
use image::RgbImage;
use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;
use plotters::element::PathElement;
use plotters::style::{Color, RGBColor, TextStyle};
use tracing::info;
use tyre_geometry::layout::{BoundingBox, Point};
use crate::error::FitmentError;
use crate::render::{Colour, DrawingSurface, FontSpec};

const ELLIPSE_SEGMENTS: usize = 360;

/// In-memory RGB image drawn with plotters' bitmap backend
pub struct BitmapSurface {
    width: u32,
    height: u32,
    buffer: Vec<u8>
}

impl BitmapSurface {
    pub fn new(width: u32, height: u32, background: Colour) -> BitmapSurface {
        let pixel = [background.r, background.g, background.b];
        let buffer = pixel.iter().copied().cycle().take(width as usize * height as usize * 3).collect();
        BitmapSurface { width, height, buffer }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some(Colour::new(self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]))
    }

    /// Encode the image, the format is picked from the file extension
    pub fn save(&self, path: &Path) -> Result<(), FitmentError> {
        let image = RgbImage::from_raw(self.width, self.height, self.buffer.clone()).ok_or_else(|| {
            FitmentError::DrawingError(format!("image buffer doesn't match {}x{}", self.width, self.height))
        })?;
        image.save(path)?;
        info!("Saved {}", path.display());
        Ok(())
    }

    fn draw_path(&mut self, points: Vec<(i32, i32)>, colour: Colour, stroke_width: u32) -> Result<(), FitmentError> {
        let style = RGBColor::from(colour).stroke_width(stroke_width);
        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height)).into_drawing_area();
        root.draw(&PathElement::new(points, style)).map_err(drawing_error)?;
        root.present().map_err(drawing_error)
    }
}

fn to_backend_coord(point: &Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn drawing_error(e: impl std::error::Error) -> FitmentError {
    FitmentError::DrawingError(e.to_string())
}

impl DrawingSurface for BitmapSurface {
    fn polygon(&mut self, points: &[Point], outline: Colour, stroke_width: u32) -> Result<(), FitmentError> {
        let mut path: Vec<(i32, i32)> = points.iter().map(to_backend_coord).collect();
        if let Some(first) = path.first().copied() {
            path.push(first);
        }
        self.draw_path(path, outline, stroke_width)
    }

    fn ellipse(&mut self, bbox: &BoundingBox, outline: Colour, stroke_width: u32) -> Result<(), FitmentError> {
        let centre = bbox.centre();
        let radius_x = bbox.width() / 2.0;
        let radius_y = bbox.height() / 2.0;
        let path = (0..=ELLIPSE_SEGMENTS)
            .map(|segment| {
                let angle = TAU * segment as f64 / ELLIPSE_SEGMENTS as f64;
                to_backend_coord(&Point::new(centre.x + radius_x * angle.cos(), centre.y + radius_y * angle.sin()))
            })
            .collect();
        self.draw_path(path, outline, stroke_width)
    }

    fn line(&mut self, points: &[Point], colour: Colour, stroke_width: u32) -> Result<(), FitmentError> {
        self.draw_path(points.iter().map(to_backend_coord).collect(), colour, stroke_width)
    }

    fn text(&mut self, position: Point, text: &str, colour: Colour, font: &FontSpec) -> Result<(), FitmentError> {
        let rgb = RGBColor::from(colour);
        let style = TextStyle::from((font.family.as_str(), font.size as f64)).color(&rgb);
        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height)).into_drawing_area();
        root.draw_text(text, &style, to_backend_coord(&position)).map_err(drawing_error)?;
        root.present().map_err(drawing_error)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tyre_geometry::layout::{BoundingBox, Point};
    use crate::render::{BitmapSurface, Colour, DrawingSurface, FontSpec};

    const BLACK: Colour = Colour::new(0, 0, 0);
    const WHITE: Colour = Colour::new(255, 255, 255);
    const RED: Colour = Colour::new(255, 0, 0);

    #[test]
    fn starts_filled_with_background() {
        let surface = BitmapSurface::new(20, 10, RED);
        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(19, 9), Some(RED));
        assert_eq!(surface.pixel(20, 0), None);
    }

    #[test]
    fn polygon_outline_is_drawn() {
        let mut surface = BitmapSurface::new(50, 50, BLACK);
        let square = [Point::new(10.0, 10.0), Point::new(40.0, 10.0), Point::new(40.0, 40.0), Point::new(10.0, 40.0)];
        surface.polygon(&square, WHITE, 1).unwrap();
        assert_eq!(surface.pixel(25, 10), Some(WHITE));
        assert_eq!(surface.pixel(10, 25), Some(WHITE));
        // closing edge
        assert_eq!(surface.pixel(10, 30), Some(WHITE));
        // outline only
        assert_eq!(surface.pixel(25, 25), Some(BLACK));
    }

    #[test]
    fn ellipse_outline_is_drawn() {
        let mut surface = BitmapSurface::new(100, 100, BLACK);
        let bbox = BoundingBox { top_left: Point::new(20.0, 20.0), bottom_right: Point::new(80.0, 80.0) };
        surface.ellipse(&bbox, RED, 1).unwrap();
        assert_eq!(surface.pixel(80, 50), Some(RED));
        assert_eq!(surface.pixel(20, 50), Some(RED));
        assert_eq!(surface.pixel(50, 50), Some(BLACK));
    }

    #[test]
    fn text_is_drawn() {
        let mut surface = BitmapSurface::new(120, 40, BLACK);
        let font = FontSpec { family: "sans-serif".to_string(), size: 14 };
        if let Err(e) = surface.text(Point::new(5.0, 5.0), "205/45R17", WHITE, &font) {
            // no system font to rasterise with
            eprintln!("skipping text render: {}", e);
            return;
        }
        let touched = (0..120).flat_map(|x| (0..40).map(move |y| (x, y)))
            .filter(|(x, y)| surface.pixel(*x, *y) != Some(BLACK))
            .count();
        assert!(touched > 0);
    }

    #[test]
    fn save_png() {
        let mut surface = BitmapSurface::new(30, 30, BLACK);
        surface.line(&[Point::new(5.0, 5.0), Point::new(5.0, 25.0)], WHITE, 1).unwrap();
        let path = std::env::temp_dir().join(format!("tyre-fitment-{}-line.png", std::process::id()));
        surface.save(&path).unwrap();
        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (30, 30));
        assert_eq!(saved.get_pixel(5, 15).0, [255, 255, 255]);
        fs::remove_file(&path).unwrap();
    }
}
