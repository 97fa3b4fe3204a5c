//! Color parsing and HSL normalization for WSB style payloads.

use csscolorparser::{Color, ParseColorError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pseudo::BorderRadius;

/// RGBA channels as authored: integer channels in 0-255, fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        // Opaque black, the substitute for unparseable colors.
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }
    }
}

/// Normalized HSL(A) tuple; every channel lands in [0, 1], with hue expressed
/// as a fraction of a full turn (degrees divided by 360).
///
/// Serializes as the five-element `["HSL", h, s, l, a]` array the WSB schema
/// expects for color payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTuple {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Serialize for ColorTuple {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ("HSL", self.h, self.s, self.l, self.a).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ColorTuple {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (tag, h, s, l, a) = <(String, f64, f64, f64, f64)>::deserialize(deserializer)?;
        if tag != "HSL" {
            return Err(D::Error::custom(format!(
                "expected \"HSL\" color tag, got \"{}\"",
                tag
            )));
        }
        Ok(Self { h, s, l, a })
    }
}

/// Parses a CSS color expression such as `rgb(24, 119, 242)` or
/// `rgba(24, 119, 242, 0.5)` into its channels. Alpha defaults to 1 when the
/// expression does not carry one.
pub fn parse_color_expression(input: &str) -> Result<Rgba, ParseColorError> {
    let color = csscolorparser::parse(input.trim())?;
    Ok(to_rgba(&color))
}

fn to_rgba(color: &Color) -> Rgba {
    let [r, g, b, _] = color.to_rgba8();
    Rgba {
        r,
        g,
        b,
        a: color.a,
    }
}

/// Standard RGB -> HSL conversion with hue normalized into [0, 1].
/// Saturation and lightness are already fractional; alpha passes through.
pub fn to_normalized_hsla(rgba: Rgba) -> ColorTuple {
    let (h, s, l) = rgb_to_hsl(rgba.r, rgba.g, rgba.b);
    ColorTuple { h, s, l, a: rgba.a }
}

/// Converts a six-digit hex color (leading `#` optional) into a normalized
/// HSL triple. Achromatic input yields hue = saturation = 0.
pub fn hex_to_hsl(hex: &str) -> Result<(f64, f64, f64), ParseColorError> {
    let color = csscolorparser::parse(hex.trim())?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(rgb_to_hsl(r, g, b))
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Expands an authored border radius into per-corner values. `false` (and an
/// absent radius) means square corners.
pub fn border_radius_to_corners(radius: Option<BorderRadius>) -> [f64; 4] {
    match radius {
        Some(BorderRadius::Radius(r)) => [r, r, r, r],
        _ => [0.0, 0.0, 0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return (v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |mut t: f64| -> u8 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round() as u8
        };
        (
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }

    #[test]
    fn parses_rgb_and_rgba_expressions() {
        let rgba = parse_color_expression("rgb(24, 119, 242)").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (24, 119, 242));
        assert_eq!(rgba.a, 1.0);

        let rgba = parse_color_expression("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
        assert!((rgba.a - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_unparseable_expressions() {
        assert!(parse_color_expression("not-a-color").is_err());
        assert!(parse_color_expression("rgb(nope)").is_err());
    }

    #[test]
    fn hex_edge_cases() {
        assert_eq!(hex_to_hsl("#000000").unwrap(), (0.0, 0.0, 0.0));
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), (0.0, 0.0, 1.0));
        // leading '#' is optional
        assert_eq!(hex_to_hsl("000000").unwrap(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn round_trips_rgb_through_normalized_hsl() {
        let samples = [
            (24u8, 119u8, 242u8),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (12, 200, 33),
            (128, 128, 128),
            (250, 235, 215),
        ];
        for (r, g, b) in samples {
            let tuple = to_normalized_hsla(Rgba { r, g, b, a: 1.0 });
            let (r2, g2, b2) = hsl_to_rgb(tuple.h, tuple.s, tuple.l);
            assert!(
                (i16::from(r) - i16::from(r2)).abs() <= 1
                    && (i16::from(g) - i16::from(g2)).abs() <= 1
                    && (i16::from(b) - i16::from(b2)).abs() <= 1,
                "({}, {}, {}) round-tripped to ({}, {}, {})",
                r,
                g,
                b,
                r2,
                g2,
                b2
            );
        }
    }

    #[test]
    fn hue_is_a_fraction_of_a_full_turn() {
        // Pure red sits at 0 degrees, pure blue at 240.
        let red = to_normalized_hsla(Rgba {
            r: 255,
            g: 0,
            b: 0,
            a: 1.0,
        });
        assert_eq!(red.h, 0.0);
        let blue = to_normalized_hsla(Rgba {
            r: 0,
            g: 0,
            b: 255,
            a: 1.0,
        });
        assert!((blue.h - 240.0 / 360.0).abs() < 1e-9);
    }

    #[test]
    fn corners_expand_from_radius() {
        assert_eq!(
            border_radius_to_corners(Some(BorderRadius::Flag(false))),
            [0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            border_radius_to_corners(Some(BorderRadius::Radius(8.0))),
            [8.0, 8.0, 8.0, 8.0]
        );
        assert_eq!(border_radius_to_corners(None), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn color_tuple_serializes_as_tagged_array() {
        let tuple = ColorTuple {
            h: 0.5,
            s: 0.25,
            l: 0.75,
            a: 1.0,
        };
        let value = serde_json::to_value(tuple).unwrap();
        assert_eq!(value, serde_json::json!(["HSL", 0.5, 0.25, 0.75, 1.0]));

        let back: ColorTuple = serde_json::from_value(value).unwrap();
        assert_eq!(back, tuple);
    }
}
