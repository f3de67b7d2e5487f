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
use std::str::FromStr;
use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    fn from_name(name: &str) -> Option<Colour> {
        let colour = match name {
            "white" => Colour::new(255, 255, 255),
            "black" => Colour::new(0, 0, 0),
            "red" => Colour::new(255, 0, 0),
            "green" => Colour::new(0, 255, 0),
            "blue" => Colour::new(0, 0, 255),
            "yellow" => Colour::new(255, 255, 0),
            "cyan" => Colour::new(0, 255, 255),
            "magenta" => Colour::new(255, 0, 255),
            "grey" | "gray" => Colour::new(128, 128, 128),
            _ => return None
        };
        Some(colour)
    }

    fn from_hex(hex: &str) -> Option<Colour> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
        Some(Colour::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColourParseError {
    invalid_value: String
}

impl Display for ColourParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown colour '{}'. Expected a colour name or #rrggbb", &self.invalid_value)
    }
}

impl std::error::Error for ColourParseError {}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        let parsed = match value.strip_prefix('#') {
            Some(hex) => Colour::from_hex(hex),
            None => Colour::from_name(&value)
        };
        parsed.ok_or_else(|| ColourParseError { invalid_value: s.to_string() })
    }
}

impl From<Colour> for RGBColor {
    fn from(colour: Colour) -> Self {
        RGBColor(colour.r, colour.g, colour.b)
    }
}

#[cfg(test)]
mod tests {
    use crate::render::colour::Colour;

    #[test]
    fn parse_named_colours() {
        assert_eq!("white".parse::<Colour>().unwrap(), Colour::new(255, 255, 255));
        assert_eq!(" Red ".parse::<Colour>().unwrap(), Colour::new(255, 0, 0));
        assert_eq!("gray".parse::<Colour>().unwrap(), "grey".parse::<Colour>().unwrap());
    }

    #[test]
    fn parse_hex_colours() {
        assert_eq!("#00ff7f".parse::<Colour>().unwrap(), Colour::new(0, 255, 127));
        assert_eq!("#A0B0C0".parse::<Colour>().unwrap(), Colour::new(160, 176, 192));
    }

    #[test]
    fn parse_invalid_colours() {
        for bad in ["", "#fff", "#gg0000", "mauve", "#ff00ff00", "#ééé"] {
            let err = bad.parse::<Colour>().unwrap_err();
            assert!(err.to_string().contains("Unknown colour"), "{}", bad);
        }
    }
}
