use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaperTreeError;

/// A style color. `Inherit` leaves the host's color in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    #[default]
    Inherit,
}

/// An opaque terminal color.
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

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }

    /// Resolve against the color underneath. Translucent colors are blended
    /// over `base`; `Inherit` yields `base`.
    pub fn composite_over(&self, base: Rgb) -> Rgb {
        match *self {
            Self::Inherit => base,
            Self::Rgba { r, g, b, a } if a >= 1.0 => Rgb::new(r, g, b),
            Self::Rgba { a, .. } if a <= 0.0 => base,
            Self::Rgba { r, g, b, a } => blend(Rgb::new(r, g, b), base, a),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Inherit => "inherit".to_string(),
            Self::Rgba { r, g, b, a } if *a >= 1.0 => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }
}

/// Mix `top` over `base` with opacity `alpha` in Oklab space.
fn blend(top: Rgb, base: Rgb, alpha: f32) -> Rgb {
    use palette::{IntoColor, Oklab, Srgb};

    let to_oklab = |c: Rgb| -> Oklab {
        Srgb::new(c.r, c.g, c.b)
            .into_format::<f32>()
            .into_color()
    };
    let over = to_oklab(top);
    let under = to_oklab(base);
    let lerp = |from: f32, to: f32| from + (to - from) * alpha;

    let mixed = Oklab::new(
        lerp(under.l, over.l),
        lerp(under.a, over.a),
        lerp(under.b, over.b),
    );
    let srgb: Srgb = mixed.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

impl FromStr for Color {
    type Err = PaperTreeError;

    /// Parses `inherit`, `#rgb`, `#rrggbb`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaperTreeError::InvalidColor(s.to_string());
        let input = s.trim().to_ascii_lowercase();

        if input == "inherit" {
            return Ok(Self::Inherit);
        }

        if let Some(hex) = input.strip_prefix('#') {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?;
            return match digits.as_slice() {
                [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
                [r1, r2, g1, g2, b1, b2] => {
                    Ok(Self::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
                }
                _ => Err(invalid()),
            };
        }

        let (args, has_alpha) = if let Some(rest) = input.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = input.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };

        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());

        match (parts.as_slice(), has_alpha) {
            ([r, g, b], false) => Ok(Self::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
            ([r, g, b, a], true) => {
                let a = a.parse::<f32>().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(invalid());
                }
                Ok(Self::rgba(channel(*r)?, channel(*g)?, channel(*b)?, a))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("inherit".parse::<Color>().unwrap(), Color::Inherit);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!("#0088FF".parse::<Color>().unwrap(), Color::rgb(0, 136, 255));
        assert_eq!(
            "rgba(0, 136, 255, 0.18)".parse::<Color>().unwrap(),
            Color::rgba(0, 136, 255, 0.18)
        );
        assert_eq!("rgb(1,2,3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "blue", "#12", "rgb(1,2)", "rgba(1,2,3,4)", "rgb(300,0,0)"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_css_round_trip() {
        let c = Color::rgba(0, 136, 255, 0.18);
        assert_eq!(c.to_css(), "rgba(0, 136, 255, 0.18)");
        assert_eq!(c.to_css().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn test_composite_extremes() {
        let base = Rgb::new(10, 20, 30);
        assert_eq!(Color::Inherit.composite_over(base), base);
        assert_eq!(Color::rgba(200, 0, 0, 0.0).composite_over(base), base);
        assert_eq!(Color::rgb(200, 0, 0).composite_over(base), Rgb::new(200, 0, 0));
    }

    #[test]
    fn test_composite_translucent_lies_between() {
        let base = Rgb::new(0, 0, 0);
        let mixed = Color::rgba(0, 136, 255, 0.18).composite_over(base);
        assert!(mixed.b > 0 && mixed.b < 255);
        assert!(!close(mixed, base));
        assert!(!close(mixed, Rgb::new(0, 136, 255)));
    }
}
