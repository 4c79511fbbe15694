use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A CSS colour as sent by the server (`#rrggbb` or `#rgb`).
///
/// Always rendered back in the normalised lowercase `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(Rgb);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    pub const fn to_rgb(&self) -> Rgb {
        self.0
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Color {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with('#') {
            return Err(DomError::InvalidColor(s.to_string()));
        }
        let srgb: Srgb<u8> = trimmed
            .parse()
            .map_err(|_| DomError::InvalidColor(s.to_string()))?;
        let (r, g, b) = srgb.into_components();
        Ok(Self::rgb(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#3F3F4F".parse::<Color>().unwrap(), Color::rgb(0x3f, 0x3f, 0x4f));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn test_display_normalises() {
        let color: Color = "#AFAFCF".parse().unwrap();
        assert_eq!(color.to_css(), "#afafcf");
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!("red".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }
}
