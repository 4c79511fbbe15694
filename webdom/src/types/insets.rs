use std::fmt;
use std::str::FromStr;

use crate::error::DomError;

/// Pixel insets in CSS shorthand order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn horizontal_total(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> i32 {
        self.top + self.bottom
    }
}

fn parse_pixels(token: &str) -> Option<i32> {
    let number = token.strip_suffix("px").unwrap_or(token);
    number.trim().parse().ok()
}

/// Parses the CSS shorthand form: one to four pixel values, `px` optional.
impl FromStr for Insets {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Option<Vec<i32>> = s.split_whitespace().map(parse_pixels).collect();
        let values = values.ok_or_else(|| DomError::InvalidInsets(s.to_string()))?;
        match values.as_slice() {
            [all] => Ok(Self::all(*all)),
            [vertical, horizontal] => Ok(Self::symmetric(*vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            _ => Err(DomError::InvalidInsets(s.to_string())),
        }
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand_forms() {
        assert_eq!("2px".parse::<Insets>().unwrap(), Insets::all(2));
        assert_eq!("1px 4px".parse::<Insets>().unwrap(), Insets::new(1, 4, 1, 4));
        assert_eq!("1 2 3".parse::<Insets>().unwrap(), Insets::new(1, 2, 3, 2));
        assert_eq!(
            "1px 2px 3px 4px".parse::<Insets>().unwrap(),
            Insets::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Insets>().is_err());
        assert!("1em".parse::<Insets>().is_err());
        assert!("1 2 3 4 5".parse::<Insets>().is_err());
    }

    #[test]
    fn test_display_is_css_padding() {
        assert_eq!(Insets::new(1, 2, 3, 4).to_string(), "1px 2px 3px 4px");
    }
}
